use crate::domain::portfolio::entity::{Project, ProjectSection};

pub trait ProjectRepository: Send + Sync {
    fn list(&self) -> &[Project];

    fn list_section(&self, section: ProjectSection) -> Vec<&Project> {
        self.list()
            .iter()
            .filter(|project| project.section == section)
            .collect()
    }
}
