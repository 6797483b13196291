use super::application::{Application, SnapshotError};
use super::domain::Classification;

/// Ordered-by-id collection of applications.
///
/// Ids are unique and ascending; the next id is always one past the largest
/// id present (1 for an empty roster), including after a merge brings in
/// records with arbitrary ids.
#[derive(Debug, Default)]
pub struct Roster {
    applications: Vec<Application>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new application under the next free id and return that id.
    pub fn create(
        &mut self,
        summary: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<u32, SnapshotError> {
        let id = self.next_id();
        let application = Application::new(id, summary, note)?;
        self.applications.push(application);
        Ok(id)
    }

    fn next_id(&self) -> u32 {
        self.applications
            .iter()
            .map(Application::id)
            .max()
            .map_or(1, |id| id + 1)
    }

    /// Bulk-insert applications, silently dropping any whose id collides
    /// with an existing record, and keep the roster sorted.
    pub fn merge(&mut self, incoming: Vec<Application>) {
        for application in incoming {
            if self.get(application.id()).is_some() {
                continue;
            }
            let at = self
                .applications
                .iter()
                .position(|existing| existing.id() > application.id())
                .unwrap_or(self.applications.len());
            self.applications.insert(at, application);
        }
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn get(&self, id: u32) -> Option<&Application> {
        self.applications
            .iter()
            .find(|application| application.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: u32) -> Option<&mut Application> {
        self.applications
            .iter_mut()
            .find(|application| application.id() == id)
    }

    pub fn by_classification(&self, classification: Classification) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|application| application.classification() == classification)
            .collect()
    }

    pub fn remove(&mut self, id: u32) -> Option<Application> {
        let at = self
            .applications
            .iter()
            .position(|application| application.id() == id)?;
        Some(self.applications.remove(at))
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }
}
