//! Newsletter and order form commands.

use anyhow::{bail, Result};
use fabsite_catalog::forms::{
    format_phone, submit, ConfirmationSubmitter, NewsletterSignup, OrderRequest, Submission,
};
use fabsite_catalog::CatalogError;

use super::{OrderArgs, SubscribeArgs};
use crate::context::Context;

/// Run the subscribe command.
pub fn subscribe(args: SubscribeArgs, ctx: &Context) -> Result<()> {
    let submission = Submission::Newsletter(NewsletterSignup::new(args.email, args.source));
    send(&submission, ctx)
}

/// Run the order command.
pub fn order(args: OrderArgs, ctx: &Context) -> Result<()> {
    let phone = format_phone(&args.phone);
    let mut request = OrderRequest::new(args.name, args.email, phone, args.product);
    request.company = args.company;
    request.message = args.message;
    send(&Submission::Order(request), ctx)
}

fn send(submission: &Submission, ctx: &Context) -> Result<()> {
    match submit(&ConfirmationSubmitter, submission) {
        Ok(confirmation) => {
            if ctx.output.is_json() {
                ctx.output.json(&confirmation);
            } else {
                ctx.output.success(&confirmation.message);
            }
            Ok(())
        }
        Err(CatalogError::Validation(errors)) => {
            if ctx.output.is_json() {
                ctx.output.json(&errors);
            } else {
                for error in errors.iter() {
                    ctx.output
                        .warn(&format!("{}: {}", error.field.as_str(), error.message));
                }
            }
            bail!("{} field(s) failed validation", errors.len())
        }
        Err(e) => Err(e.into()),
    }
}
