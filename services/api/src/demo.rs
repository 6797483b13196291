use crate::infra::parse_classification;
use clap::Args;
use hirepath::error::AppError;
use hirepath::workflows::hiring::{
    write_roster_csv, Action, Application, Classification, Command, HiringTracker, Resolution,
};
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RosterReportArgs {
    /// Roster data file to read
    #[arg(long)]
    pub(crate) data_file: PathBuf,
    /// Only include applications with this classification (New, Old, Hired)
    #[arg(long, value_parser = parse_classification)]
    pub(crate) classification: Option<Classification>,
    /// Write the report as CSV to this path instead of printing a table
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Print each application as pretty JSON, including its note log
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Save the demo roster to this file at the end of the walkthrough
    #[arg(long)]
    pub(crate) save_to: Option<PathBuf>,
}

pub(crate) fn run_roster_report(args: RosterReportArgs) -> Result<(), AppError> {
    let RosterReportArgs {
        data_file,
        classification,
        csv,
        json,
    } = args;

    let mut tracker = HiringTracker::new();
    let count = tracker.load_from_file(&data_file)?;

    let selected: Vec<&Application> = match classification {
        Some(classification) => tracker.applications_by_classification(classification),
        None => tracker.applications().iter().collect(),
    };

    if let Some(path) = csv {
        let file = File::create(&path)?;
        write_roster_csv(file, selected.iter().copied())?;
        println!(
            "Exported {} of {} applications to {}",
            selected.len(),
            count,
            path.display()
        );
        return Ok(());
    }

    println!("Roster report for {}", data_file.display());
    render_roster(&selected, json);

    let summary = tracker.roster_summary();
    println!("\nTotals ({} applications)", summary.total);
    println!("  Phases:");
    for (phase, count) in &summary.phases {
        println!("    - {phase}: {count}");
    }
    println!("  Classifications:");
    for (classification, count) in &summary.classifications {
        println!("    - {classification}: {count}");
    }

    Ok(())
}

fn render_roster(applications: &[&Application], json: bool) {
    if applications.is_empty() {
        println!("  (no applications)");
        return;
    }

    for application in applications {
        if json {
            match serde_json::to_string_pretty(&application.view()) {
                Ok(payload) => println!("{payload}"),
                Err(err) => println!("  Application view unavailable: {err}"),
            }
            continue;
        }
        println!(
            "- #{} [{}/{}] {}{}",
            application.id(),
            application.phase().label(),
            application.classification().label(),
            application.summary(),
            application
                .reviewer()
                .map(|reviewer| format!(" (reviewer: {reviewer})"))
                .unwrap_or_default()
        );
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { save_to } = args;

    println!("Hiring pipeline demo");
    let mut tracker = HiringTracker::new();

    let hired = tracker.add_application("Senior backend engineer", "Received application")?;
    let parked = tracker.add_application("Product designer", "Received application")?;
    let declined = tracker.add_application("Engineering manager", "Received application")?;
    println!("- Opened applications #{hired}, #{parked}, #{declined} in Review");

    // Walk the first application all the way to a hire.
    tracker.execute(hired, &command(Action::Accept, Some("reviewer1"), None, "Resume looks strong")?)?;
    tracker.execute(hired, &command(Action::Accept, Some("reviewer1"), None, "Interview went well")?)?;
    tracker.execute(hired, &command(Action::Accept, Some("reviewer2"), None, "References confirmed")?)?;
    tracker.execute(
        hired,
        &command(
            Action::Accept,
            Some("reviewer2"),
            Some(Resolution::OfferCompleted),
            "Offer signed",
        )?,
    )?;
    report_application(&tracker, hired);

    // Park the second after its interview, then resume it.
    tracker.execute(parked, &command(Action::Accept, Some("reviewer3"), None, "Portfolio review passed")?)?;
    tracker.execute(
        parked,
        &command(
            Action::Standby,
            Some("reviewer3"),
            Some(Resolution::InterviewCompleted),
            "No open headcount this quarter",
        )?,
    )?;
    tracker.execute(
        parked,
        &command(
            Action::Reopen,
            Some("reviewer4"),
            Some(Resolution::InterviewCompleted),
            "Headcount approved",
        )?,
    )?;
    report_application(&tracker, parked);

    // Decline the third outright; a fatal command shows the guard rails.
    tracker.execute(
        declined,
        &command(
            Action::Reject,
            None,
            Some(Resolution::ReviewCompleted),
            "Role requirements not met",
        )?,
    )?;
    let premature = command(Action::Accept, Some("reviewer5"), None, "Trying to revive")?;
    match tracker.execute(declined, &premature) {
        Ok(()) => println!("- Unexpectedly revived #{declined}"),
        Err(err) => println!("- Command rejected as expected: {err}"),
    }
    report_application(&tracker, declined);

    if let Some(path) = save_to {
        tracker.save_to_file(&path)?;
        let mut reloaded = HiringTracker::new();
        reloaded.load_from_file(&path)?;
        println!(
            "\nSaved {} applications to {} and verified the reload",
            reloaded.applications().len(),
            path.display()
        );
    }

    Ok(())
}

fn command(
    action: Action,
    reviewer: Option<&str>,
    resolution: Option<Resolution>,
    note: &str,
) -> Result<Command, AppError> {
    Ok(Command::new(
        action,
        reviewer.map(str::to_owned),
        resolution,
        note,
    )?)
}

fn report_application(tracker: &HiringTracker, id: u32) {
    let Some(application) = tracker.application(id) else {
        println!("- Application #{id} missing");
        return;
    };
    println!(
        "- #{} is now {}/{} ({} notes)",
        id,
        application.phase().label(),
        application.classification().label(),
        application.notes().len()
    );
    for note in application.notes() {
        println!("    {note}");
    }
}
