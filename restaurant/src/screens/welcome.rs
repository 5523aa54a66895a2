//! Landing screen: average prices and the login form

use shared::screen_info;

use super::{ScreenContext, ask, report_form_error, unknown_command};
use crate::core::pricing::{course_averages, format_amount};
use crate::core::{Role, authenticate};
use crate::error::RestaurantResult;
use crate::navigation::{Route, Transition};
use crate::traits::{Console, IdGenerator};

pub async fn run<C, G>(ctx: &mut ScreenContext<'_, C, G>) -> RestaurantResult<Transition>
where
    C: Console,
    G: IdGenerator,
{
    let mut lines = vec![format!("Average Prices ({})", ctx.store.current_catalog())];
    for average in course_averages(ctx.store.menu()) {
        lines.push(format!(
            "  {}: {}",
            average.course.plural_label(),
            format_amount(average.average)
        ));
    }
    lines.push(String::new());
    lines.push("1) Login   2) Help   0) Quit".to_string());
    ctx.console.show(&lines.join("\n")).await?;

    let choice = ask(ctx.console, "> ").await?;
    match choice.trim() {
        "1" => login(ctx).await,
        "2" => Ok(Transition::Navigate(Route::Help)),
        "0" => Ok(Transition::Quit),
        _ => unknown_command(ctx.console, &choice).await,
    }
}

async fn login<C, G>(ctx: &mut ScreenContext<'_, C, G>) -> RestaurantResult<Transition>
where
    C: Console,
    G: IdGenerator,
{
    let username = ask(ctx.console, "Username: ").await?;
    let password = ask(ctx.console, "Password: ").await?;

    match authenticate(&username, &password, ctx.owner) {
        Ok(Role::Owner) => {
            screen_info!(Route::Welcome, role = %Role::Owner, "Logged in");
            Ok(Transition::Navigate(Route::OwnerDashboard))
        }
        Ok(Role::Customer) => {
            screen_info!(Route::Welcome, role = %Role::Customer, "Logged in");
            Ok(Transition::Navigate(Route::Menu))
        }
        Err(error) => {
            report_form_error(ctx.console, Route::Welcome, &error).await?;
            Ok(Transition::Stay)
        }
    }
}
