use super::common::{accept, new_application, standby_with};
use crate::workflows::hiring::application::Application;
use crate::workflows::hiring::codec::{read_from, write_to, CodecError};
use crate::workflows::hiring::domain::{Classification, Phase, Resolution};

const SAMPLE: &str = "\
*1,Review,New,Backend engineer opening,,false,
-[Review] Received application
*3,Waitlist,Old,Site reliability engineer opening,reviewer2,false,InterviewCompleted
-[Review] Received application
-[Interview] Phone screen passed
-[Waitlist] Parked until headcount opens
";

#[test]
fn reads_a_well_formed_file() {
    let applications = read_from(SAMPLE.as_bytes()).expect("sample parses");
    assert_eq!(applications.len(), 2);

    assert_eq!(applications[0].id(), 1);
    assert_eq!(applications[0].phase(), Phase::Review);
    assert_eq!(applications[0].reviewer(), None);
    assert_eq!(applications[0].notes().len(), 1);

    assert_eq!(applications[1].id(), 3);
    assert_eq!(applications[1].phase(), Phase::Waitlist);
    assert_eq!(applications[1].classification(), Classification::Old);
    assert_eq!(
        applications[1].resolution(),
        Some(Resolution::InterviewCompleted)
    );
    assert_eq!(
        applications[1].notes().last().unwrap(),
        "-[Waitlist] Parked until headcount opens"
    );
}

#[test]
fn write_then_read_round_trips() {
    let mut parked = new_application();
    parked.apply(&accept("reviewer1")).expect("review accept");
    parked
        .apply(&standby_with("reviewer1", Resolution::InterviewCompleted))
        .expect("interview standby");
    let second =
        Application::new(2, "Data engineer opening", "Received application").expect("valid");
    let applications = vec![parked, second];

    let mut buffer = Vec::new();
    write_to(&mut buffer, &applications).expect("write succeeds");
    let reloaded = read_from(buffer.as_slice()).expect("reload succeeds");

    assert_eq!(reloaded, applications);
}

#[test]
fn serialization_is_idempotent() {
    let application = new_application();
    assert_eq!(application.serialize(), application.serialize());
}

#[test]
fn writes_records_in_ascending_id_order() {
    let high = Application::new(9, "Platform opening", "note").expect("valid");
    let low = Application::new(2, "Support opening", "note").expect("valid");

    let mut buffer = Vec::new();
    write_to(&mut buffer, &[high, low]).expect("write succeeds");
    let text = String::from_utf8(buffer).expect("utf8");

    let first = text.find("*2,").expect("low id present");
    let second = text.find("*9,").expect("high id present");
    assert!(first < second);
}

#[test]
fn an_extra_header_field_fails_the_whole_load() {
    let text = "\
*1,Review,New,Backend engineer opening,,false,,stray
-[Review] Received application
";
    match read_from(text.as_bytes()) {
        Err(CodecError::Malformed { line: 1, .. }) => {}
        other => panic!("expected a malformed header error, got {other:?}"),
    }
}

#[test]
fn a_short_header_fails_the_whole_load() {
    let text = "*1,Review,New,Backend engineer opening\n-[Review] note\n";
    assert!(matches!(
        read_from(text.as_bytes()),
        Err(CodecError::Malformed { line: 1, .. })
    ));
}

#[test]
fn a_bad_id_or_flag_fails_the_whole_load() {
    let bad_id = "*one,Review,New,Opening,,false,\n-[Review] note\n";
    assert!(matches!(
        read_from(bad_id.as_bytes()),
        Err(CodecError::Malformed { .. })
    ));

    let bad_flag = "*1,Review,New,Opening,,yes,\n-[Review] note\n";
    assert!(matches!(
        read_from(bad_flag.as_bytes()),
        Err(CodecError::Malformed { .. })
    ));
}

#[test]
fn one_bad_record_aborts_even_when_others_are_valid() {
    let text = "\
*1,Review,New,Backend engineer opening,,false,
-[Review] Received application
*2,Screening,New,Data engineer opening,,false,
-[Review] Received application
";
    assert!(matches!(
        read_from(text.as_bytes()),
        Err(CodecError::Snapshot(_))
    ));
}

#[test]
fn a_record_without_notes_fails_the_load() {
    let text = "\
*1,Review,New,Backend engineer opening,,false,
*2,Review,New,Data engineer opening,,false,
-[Review] Received application
";
    assert!(matches!(
        read_from(text.as_bytes()),
        Err(CodecError::Snapshot(_))
    ));
}

#[test]
fn a_note_before_any_header_fails_the_load() {
    let text = "-[Review] orphan note\n";
    assert!(matches!(
        read_from(text.as_bytes()),
        Err(CodecError::Malformed { line: 1, .. })
    ));
}

#[test]
fn a_line_that_belongs_to_no_record_fails_the_load() {
    let text = "\
*1,Review,New,Backend engineer opening,,false,
-[Review] Received application
unexpected trailer
";
    assert!(matches!(
        read_from(text.as_bytes()),
        Err(CodecError::Malformed { line: 3, .. })
    ));
}

#[test]
fn invariant_violations_surface_as_snapshot_errors() {
    // A Review-phase record must not carry a reviewer.
    let text = "\
*1,Review,New,Backend engineer opening,reviewer1,false,
-[Review] Received application
";
    assert!(matches!(
        read_from(text.as_bytes()),
        Err(CodecError::Snapshot(_))
    ));
}
