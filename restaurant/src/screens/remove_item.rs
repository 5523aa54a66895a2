//! Owner form for removing a dish from the active menu

use shared::{MenuItem, screen_info};

use super::{ScreenContext, ask, choose_course, pick, report_form_error};
use crate::core::FormError;
use crate::error::RestaurantResult;
use crate::navigation::{Route, Transition};
use crate::traits::{Console, IdGenerator};

pub async fn run<C, G>(ctx: &mut ScreenContext<'_, C, G>) -> RestaurantResult<Transition>
where
    C: Console,
    G: IdGenerator,
{
    let Some(course) = choose_course(ctx.console, None).await? else {
        return Ok(Transition::Back);
    };

    let items: Vec<MenuItem> = ctx.store.items_for_course(course).cloned().collect();
    let mut lines = vec![format!("{} on the menu:", course.plural_label())];
    if items.is_empty() {
        lines.push("  No items available.".to_string());
    }
    for (i, item) in items.iter().enumerate() {
        lines.push(format!("  {:>2}. {} ({})", i + 1, item.name, item.price));
    }
    ctx.console.show(&lines.join("\n")).await?;

    let choice = ask(ctx.console, "Dish to remove (number): ").await?;
    let refs: Vec<&MenuItem> = items.iter().collect();
    let Some(selected) = pick(&refs, &choice) else {
        let error = FormError::NoSelection("Please choose an item to remove.".to_string());
        report_form_error(ctx.console, Route::RemoveFromMenu, &error).await?;
        return Ok(Transition::Stay);
    };

    if let Some(removed) = ctx.store.remove_menu_item(&selected.id) {
        screen_info!(Route::RemoveFromMenu, id = %removed.id, dish = %removed.name, "Dish removed");
        ctx.console
            .alert("Removed", &format!("{} has been removed.", removed.name))
            .await?;
    }
    Ok(Transition::Navigate(Route::OwnerDashboard))
}
