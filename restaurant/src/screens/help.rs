//! Customer help query form

use shared::screen_info;

use super::{ScreenContext, ask, report_form_error, unknown_command};
use crate::core::{HelpForm, HelpRequest};
use crate::error::RestaurantResult;
use crate::navigation::{Route, Transition};
use crate::traits::{Console, IdGenerator};

pub async fn run<C, G>(ctx: &mut ScreenContext<'_, C, G>) -> RestaurantResult<Transition>
where
    C: Console,
    G: IdGenerator,
{
    ctx.console
        .show("Need a hand? Send the restaurant a query.\n\n1) Write a query   0) Back")
        .await?;
    let choice = ask(ctx.console, "> ").await?;
    match choice.trim() {
        "1" => {}
        "0" | "b" => return Ok(Transition::Back),
        _ => return unknown_command(ctx.console, &choice).await,
    }

    let form = HelpForm {
        full_name: ask(ctx.console, "Full name: ").await?,
        contact: ask(ctx.console, "Phone or email: ").await?,
        message: ask(ctx.console, "Message: ").await?,
    };

    match form.validate() {
        Ok(request) => {
            send(&request)?;
            ctx.console
                .alert("Sent", "Your query has been sent to the restaurant.")
                .await?;
            Ok(Transition::Navigate(Route::Welcome))
        }
        Err(error) => {
            report_form_error(ctx.console, Route::Help, &error).await?;
            Ok(Transition::Stay)
        }
    }
}

/// There is no backend: delivering a query means recording it in the log
fn send(request: &HelpRequest) -> RestaurantResult<()> {
    let payload = serde_json::to_string(request)?;
    screen_info!(Route::Help, reference = %request.reference, payload = %payload, "Help query sent");
    Ok(())
}
