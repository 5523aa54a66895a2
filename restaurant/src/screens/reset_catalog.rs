//! Owner screen for loading one of the seed menus

use shared::{CatalogId, screen_info, screen_warn};

use super::{ScreenContext, ask, report_form_error};
use crate::core::FormError;
use crate::error::RestaurantResult;
use crate::navigation::{Route, Transition};
use crate::traits::{Console, IdGenerator};

pub async fn run<C, G>(ctx: &mut ScreenContext<'_, C, G>) -> RestaurantResult<Transition>
where
    C: Console,
    G: IdGenerator,
{
    ctx.console
        .show(&format!(
            "Now showing {}. Loading another menu clears the current order.\nSelect a menu: 1  2  3   (b to go back)",
            ctx.store.current_catalog()
        ))
        .await?;

    let choice = ask(ctx.console, "> ").await?;
    let choice = choice.trim();
    if choice.eq_ignore_ascii_case("b") {
        return Ok(Transition::Back);
    }
    if choice.is_empty() {
        let error = FormError::NoSelection("Please select a menu to load.".to_string());
        report_form_error(ctx.console, Route::ResetConfirmation, &error).await?;
        return Ok(Transition::Stay);
    }

    let catalog = match choice.parse::<CatalogId>() {
        Ok(catalog) => catalog,
        Err(error) => {
            screen_warn!(Route::ResetConfirmation, error = %error, "Menu selection rejected");
            ctx.console.alert("Invalid Menu", &error.to_string()).await?;
            return Ok(Transition::Stay);
        }
    };

    ctx.store.switch_catalog(catalog);
    screen_info!(Route::ResetConfirmation, catalog = catalog.number(), "Catalog switched");
    ctx.console
        .alert("Menu Changed", &format!("Now showing {catalog}."))
        .await?;
    Ok(Transition::Navigate(Route::OwnerDashboard))
}
