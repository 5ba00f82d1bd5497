use std::time::Duration;

use anyhow::Context;
use netsweep_common::config::ScanConfig;
use netsweep_core::{EchoProbe, Reachability, SubnetScanner};

use crate::commands::{LogArgs, ScanArgs, local};
use crate::terminal::{input, print, progress};

pub async fn scan(args: ScanArgs, log: &LogArgs) -> anyhow::Result<()> {
    let config = ScanConfig::new(args.upper_bound, Duration::from_millis(args.timeout_ms))?;
    let mut scanner = SubnetScanner::new(log.open_logger()?, EchoProbe::new(), config);

    if !args.no_local {
        local::print_local(&mut scanner).await?;
    }

    let prefix = match args.subnet {
        Some(subnet) => subnet.trim().to_string(),
        None => input::prompt_subnet()?,
    };

    let config = *scanner.config();
    print::header(&format!("probing {prefix}.1-{}", config.upper_bound - 1));
    let bar = progress::create_progressbar(config.host_count() as u64, prefix.clone());
    let swept = scanner
        .scan_with(&prefix, |outcome| {
            progress::println(&bar, print::outcome_line(outcome));
            bar.inc(1);
        })
        .await;
    bar.finish_and_clear();
    let outcomes = swept.context("sweep aborted, the log file is no longer writable")?;

    let reachable = outcomes.iter().filter(|o| o.is_reachable()).count();
    let failed = outcomes
        .iter()
        .filter(|o| o.status == Reachability::Failed)
        .count();
    print::summary(reachable, outcomes.len(), failed);

    let mut logger = scanner.into_logger();
    logger.close()?;
    print::end_of_program();
    Ok(())
}
