use netsweep_common::config::ScanConfig;
use netsweep_core::{EchoProbe, Probe, SubnetScanner};

use crate::commands::LogArgs;
use crate::terminal::print;

pub async fn local(log: &LogArgs) -> anyhow::Result<()> {
    let logger = log.open_logger()?;
    let mut scanner = SubnetScanner::new(logger, EchoProbe::new(), ScanConfig::default());
    print_local(&mut scanner).await?;
    scanner.into_logger().close()?;
    print::end_of_program();
    Ok(())
}

pub async fn print_local<P: Probe>(scanner: &mut SubnetScanner<P>) -> anyhow::Result<()> {
    if let Some(host) = scanner.report_local().await? {
        print::print_status(format!("localhost InetAddress: {host}"));
        print::print_status(format!("localhost host address: {}", host.address));
        print::print_status(format!("localhost host name: {}", host.host_name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use netsweep_common::event_log::EventLogger;
    use netsweep_core::{LocalHost, ProbeError};
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    struct Nameless;

    #[async_trait]
    impl Probe for Nameless {
        async fn is_reachable(&self, _host: &str, _timeout: Duration) -> Result<bool, ProbeError> {
            Ok(false)
        }

        async fn local_host(&self) -> Result<LocalHost, ProbeError> {
            Err(ProbeError::LocalHost("no host name".into()))
        }
    }

    #[tokio::test]
    async fn unresolved_host_is_only_logged() {
        let dir = TempDir::new().unwrap();
        let mut logger = EventLogger::new();
        logger.set_destination(dir.path().join("log"));
        let mut scanner = SubnetScanner::new(logger, Nameless, ScanConfig::default());

        print_local(&mut scanner).await.unwrap();

        let contents = fs::read_to_string(scanner.logger().destination()).unwrap();
        assert_eq!(contents.matches("<tr class=\"error\">").count(), 1);
    }
}
