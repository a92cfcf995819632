//! Pending/completed split of the job list.

use crate::model::job::Job;

/// Board shown by the task list screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobBoardFilter {
    /// Everything not yet completed, cancelled jobs included.
    #[default]
    Pending,
    Completed,
}

impl JobBoardFilter {
    pub fn accepts(self, job: &Job) -> bool {
        match self {
            Self::Pending => !job.status.is_completed(),
            Self::Completed => job.status.is_completed(),
        }
    }

    /// Returns the jobs on this board, in input order.
    pub fn apply(self, jobs: &[Job]) -> Vec<&Job> {
        jobs.iter().filter(|job| self.accepts(job)).collect()
    }
}
