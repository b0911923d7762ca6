//! sms-segments: SMS encoding analysis from the command line.

use anyhow::Result;

fn main() -> Result<()> {
    sms_segments::cli::run()
}
