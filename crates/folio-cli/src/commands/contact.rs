use folio_core::responses::ContactResponse;
use folio_site::ContactForm;
use folio_site::contact::SENT_MESSAGE;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ContactArgs;
use crate::output::output;

/// Handle `folio contact`. Validation failures are reported in the
/// response, not as a command error.
pub fn handle(args: &ContactArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&submit(args), flags.format)
}

fn submit(args: &ContactArgs) -> ContactResponse {
    let form = ContactForm {
        name: args.name.clone(),
        email: args.email.clone(),
        subject: args.subject.clone(),
        message: args.message.clone(),
    };
    match form.validate() {
        Ok(()) => {
            tracing::info!(email = %form.email.trim(), subject = %form.subject, "contact message accepted");
            ContactResponse {
                accepted: true,
                message: SENT_MESSAGE.to_string(),
            }
        }
        Err(error) => ContactResponse {
            accepted: false,
            message: error.to_string(),
        },
    }
}
