//! Contact subcommand handler
//!
//! Runs the same validation and submission flow as the page's form.

use std::time::Duration;

use anyhow::{bail, Result};

use folio::cli::ContactArgs;
use folio::contact::{ContactFlow, Field, SimulatedSubmitter, SubmitAttempt, SubmitError};
use folio::Config;

use super::output_theme;

pub fn handle(args: ContactArgs) -> Result<()> {
    let config = Config::load()?;
    let theme = output_theme();

    let mut flow = ContactFlow::new();
    let form = flow.form_mut();
    form.set_value(Field::Name, args.name);
    form.set_value(Field::Email, args.email);
    form.set_value(Field::Subject, args.subject);
    form.set_value(Field::Message, args.message);

    match flow.submit() {
        SubmitAttempt::Invalid { error, .. } => bail!("{}", error),
        SubmitAttempt::Ignored => return Err(SubmitError::Busy.into()),
        SubmitAttempt::Sending => {}
    }

    println!("{}", theme.secondary_text(flow.button().label()));
    if !args.no_delay {
        std::thread::sleep(Duration::from_millis(config.contact.submit_delay_ms));
    }

    let mut submitter = SimulatedSubmitter::new(config.contact.success_rate);
    match flow.complete(&mut submitter) {
        Some(Ok(())) => {
            println!("{}", theme.success_text(flow.button().label()));
            Ok(())
        }
        Some(Err(e)) => {
            println!("{}", theme.error_text(flow.button().label()));
            Err(e.into())
        }
        None => bail!("Nothing to send"),
    }
}
