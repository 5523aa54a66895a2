//! Terminal screens
//!
//! Each screen reads the store, renders text, handles one interaction (or a
//! short local loop when it keeps picker state) and returns a [`Transition`].
//! Screens hold no state of their own between visits beyond local buffers.

pub mod add_item;
pub mod filter;
pub mod help;
pub mod menu;
pub mod order_details;
pub mod owner_dashboard;
pub mod remove_item;
pub mod reset_catalog;
pub mod welcome;

use shared::{Course, MenuItem, screen_warn};

use crate::core::{FormError, MenuStore, OwnerCredentials};
use crate::error::{RestaurantError, RestaurantResult};
use crate::navigation::{Route, Transition};
use crate::traits::{Console, IdGenerator};

/// Everything a screen may touch while it is on top
pub struct ScreenContext<'a, C, G>
where
    C: Console,
    G: IdGenerator,
{
    pub store: &'a mut MenuStore<G>,
    pub console: &'a mut C,
    pub owner: &'a OwnerCredentials,
}

/// Render `route` and handle its interaction
pub async fn run<C, G>(route: Route, ctx: &mut ScreenContext<'_, C, G>) -> RestaurantResult<Transition>
where
    C: Console,
    G: IdGenerator,
{
    ctx.console.show(&header(route)).await?;
    match route {
        Route::Welcome => welcome::run(ctx).await,
        Route::Menu => menu::run(ctx).await,
        Route::Filter => filter::run(ctx).await,
        Route::OrderDetails => order_details::run(ctx).await,
        Route::Help => help::run(ctx).await,
        Route::OwnerDashboard => owner_dashboard::run(ctx).await,
        Route::AddToMenu => add_item::run(ctx).await,
        Route::RemoveFromMenu => remove_item::run(ctx).await,
        Route::ResetConfirmation => reset_catalog::run(ctx).await,
    }
}

pub(crate) fn header(route: Route) -> String {
    format!("\n==== {} ====", route.title())
}

/// Read one line; end of input ends the session
pub(crate) async fn ask<C: Console>(console: &mut C, prompt: &str) -> RestaurantResult<String> {
    console.read_line(prompt).await?.ok_or(RestaurantError::InputClosed)
}

/// Split `"a 3"` into `("a", "3")`, lower-casing the command word
pub(crate) fn split_command(line: &str) -> (String, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command.to_lowercase(), rest.trim()),
        None => (line.to_lowercase(), ""),
    }
}

/// Show a rejected form as an alert
pub(crate) async fn report_form_error<C: Console>(
    console: &mut C,
    route: Route,
    error: &FormError,
) -> RestaurantResult<()> {
    screen_warn!(route, error = %error, "Form rejected");
    console.alert(error.title(), &error.alert_message()).await
}

/// Dishes grouped by course in display order
pub(crate) fn course_ordered<G: IdGenerator>(store: &MenuStore<G>) -> Vec<&MenuItem> {
    Course::ALL
        .iter()
        .flat_map(|&course| store.items_for_course(course))
        .collect()
}

/// Resolve a 1-based listing number
pub(crate) fn pick<'m>(items: &[&'m MenuItem], choice: &str) -> Option<&'m MenuItem> {
    let index: usize = choice.trim().parse().ok()?;
    index.checked_sub(1).and_then(|i| items.get(i)).copied()
}

pub(crate) fn order_badge(count: usize) -> String {
    if count > 0 {
        format!("View Order ({count})")
    } else {
        "View Order".to_string()
    }
}

/// Course picker; `b` cancels, a blank line keeps `default` when given
pub(crate) async fn choose_course<C: Console>(
    console: &mut C,
    default: Option<Course>,
) -> RestaurantResult<Option<Course>> {
    let options: Vec<String> = Course::ALL
        .iter()
        .enumerate()
        .map(|(i, course)| format!("{}) {}", i + 1, course))
        .collect();
    console.show(&format!("Course: {}", options.join("  "))).await?;

    loop {
        let line = ask(console, "Course (number or name, b to go back): ").await?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("b") {
            return Ok(None);
        }
        if line.is_empty() {
            if let Some(course) = default {
                return Ok(Some(course));
            }
        }
        let by_number = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Course::ALL.get(i).copied());
        match by_number.or_else(|| line.parse::<Course>().ok()) {
            Some(course) => return Ok(Some(course)),
            None => console.show("Please choose one of the listed courses.").await?,
        }
    }
}

pub(crate) async fn unknown_command<C: Console>(console: &mut C, line: &str) -> RestaurantResult<Transition> {
    console.show(&format!("Unknown option: {}", line.trim())).await?;
    Ok(Transition::Stay)
}
