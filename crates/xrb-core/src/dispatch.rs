//! Sequential job dispatch.
//!
//! One remote query in flight per message, replies collected in queue order,
//! and a failed lookup never aborts the jobs behind it.

use std::sync::Arc;

use tracing::debug;

use crate::commands::{help_text, Keyword};
use crate::format;
use crate::ports::{ExtensionDocsPort, RemoteQueryPort};
use crate::queue::CommandJob;

/// Routes jobs to the remote query collaborators and formats each outcome
/// into one reply line.
pub struct Dispatcher {
    queries: Arc<dyn RemoteQueryPort>,
    docs: Arc<dyn ExtensionDocsPort>,
}

impl Dispatcher {
    pub fn new(queries: Arc<dyn RemoteQueryPort>, docs: Arc<dyn ExtensionDocsPort>) -> Self {
        Self { queries, docs }
    }

    /// Run every job strictly in order, awaiting each remote query before the
    /// next one starts, and return one reply line per job.
    pub async fn run(&self, jobs: &[CommandJob]) -> Vec<String> {
        let mut lines = Vec::with_capacity(jobs.len());
        for job in jobs {
            lines.push(self.run_job(job).await);
        }
        lines
    }

    async fn run_job(&self, job: &CommandJob) -> String {
        let target = job.target.as_deref().unwrap_or_default();
        let opt_arg = job.opt_arg.as_deref();

        let result = match job.keyword {
            // Answered locally, no round trip.
            Keyword::Help => return help_text(),
            Keyword::Version => self
                .queries
                .software_version(target)
                .await
                .map(|v| format::version(&v, target, opt_arg)),
            Keyword::Uptime => self
                .queries
                .last_activity(target)
                .await
                .map(|seconds| format::uptime(seconds, target)),
            Keyword::Contact => self
                .queries
                .contact_info(target)
                .await
                .map(|form| format::contact(&form, target, opt_arg)),
            Keyword::Xep => self
                .docs
                .lookup(target)
                .await
                .map(|doc| format::xep(doc.as_ref(), target, opt_arg)),
        };

        result.unwrap_or_else(|err| {
            debug!(keyword = job.keyword.name(), peer = target, %err, "remote query failed");
            format::error_report(&err, job.keyword, target)
        })
    }
}
