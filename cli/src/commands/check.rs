use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use sockprobe_common::config::Config;
use sockprobe_common::network::endpoint::{self, Endpoint};
use sockprobe_common::success;
use tokio::task::JoinSet;

use crate::commands::probe::{self, Probed};
use crate::sprint;
use crate::terminal::{format, print, spinner};

pub async fn check(targets: &str, cfg: &Config) -> anyhow::Result<ExitCode> {
    let endpoints: Vec<Endpoint> = endpoint::parse_list(targets)?;
    anyhow::ensure!(!endpoints.is_empty(), "no endpoints given");

    let unit: &str = if endpoints.len() == 1 { "endpoint" } else { "endpoints" };
    let pb = spinner::start(format!("Probing {} {unit}...", endpoints.len()), cfg.quiet);

    let start_time: Instant = Instant::now();
    let results: Vec<Probed> = probe_all(endpoints, cfg.explain).await?;
    pb.finish_and_clear();

    let all_reachable: bool = results.iter().all(|probed| probed.reachable);
    check_ends(&results, start_time.elapsed(), cfg);

    Ok(probe::exit_code(all_reachable))
}

/// Probes every endpoint on the blocking pool and returns results in input order.
pub async fn probe_all(endpoints: Vec<Endpoint>, explain: bool) -> anyhow::Result<Vec<Probed>> {
    let mut set: JoinSet<(usize, Probed)> = JoinSet::new();
    for (idx, endpoint) in endpoints.into_iter().enumerate() {
        set.spawn_blocking(move || (idx, probe::run(endpoint, explain)));
    }

    let mut results: Vec<(usize, Probed)> = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        results.push(joined.context("probe task failed")?);
    }

    results.sort_by_key(|(idx, _)| *idx);
    Ok(results.into_iter().map(|(_, probed)| probed).collect())
}

fn check_ends(results: &[Probed], total_time: Duration, cfg: &Config) {
    print::header("reachability", cfg.quiet);

    print::set_key_width(results.iter().map(|probed| format::endpoint_kind(&probed.endpoint)));
    for probed in results {
        probe::report(probed, cfg);
    }

    print_summary(results, total_time, cfg);
}

fn print_summary(results: &[Probed], total_time: Duration, cfg: &Config) {
    let reachable: usize = results.iter().filter(|probed| probed.reachable).count();
    let summary: String = format!(
        "{reachable}/{} reachable in {:.2}s",
        results.len(),
        total_time.as_secs_f64()
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&summary, |s| s.bold().green());
        }
        1 => {
            sprint!();
            success!("{summary}");
        }
        _ => {}
    }
}
