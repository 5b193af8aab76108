//! Greedy interval scheduling on a single machine

use crate::app::models::Job;

/// Maximum number of pairwise non-overlapping jobs
///
/// Jobs are taken in order of finish time; a job is accepted when it starts
/// no earlier than the finish of the last accepted job. The first job must
/// start at or after time `0`. Jobs with equal finish times keep their input
/// order.
pub fn max_schedule_count(jobs: &[Job]) -> i32 {
    let mut sorted = jobs.to_vec();
    sorted.sort_by_key(|job| job.finish);

    let mut count = 0;
    let mut previous_finish = 0;
    for job in &sorted {
        if job.start >= previous_finish {
            count += 1;
            previous_finish = job.finish;
        }
    }

    count
}
