use netsweep_common::event_log::EventLogger;

use crate::commands::LogArgs;
use crate::terminal::print;

pub fn clear(log: &LogArgs) -> anyhow::Result<()> {
    let mut logger = EventLogger::new();
    logger.set_destination(&log.log);

    if !logger.destination().exists() {
        print::print_status(format!("{} does not exist", logger.destination().display()));
        return Ok(());
    }
    logger.clear_log()?;
    print::print_status(format!("cleared {}", logger.destination().display()));
    Ok(())
}
