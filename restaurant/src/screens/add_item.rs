//! Owner form for adding a dish to the active menu

use shared::screen_info;

use super::{ScreenContext, ask, choose_course, report_form_error, unknown_command};
use crate::core::AddItemForm;
use crate::error::RestaurantResult;
use crate::navigation::{Route, Transition};
use crate::traits::{Console, IdGenerator};

pub async fn run<C, G>(ctx: &mut ScreenContext<'_, C, G>) -> RestaurantResult<Transition>
where
    C: Console,
    G: IdGenerator,
{
    ctx.console.show("1) Fill in a new dish   0) Back").await?;
    let choice = ask(ctx.console, "> ").await?;
    match choice.trim() {
        "1" => {}
        "0" | "b" => return Ok(Transition::Back),
        _ => return unknown_command(ctx.console, &choice).await,
    }

    let mut form = AddItemForm {
        name: ask(ctx.console, "Dish name: ").await?,
        description: ask(ctx.console, "Description: ").await?,
        ..AddItemForm::default()
    };
    match choose_course(ctx.console, Some(form.course)).await? {
        Some(course) => form.course = course,
        None => return Ok(Transition::Stay),
    }
    form.price = ask(ctx.console, "Price (e.g. 120): ").await?;
    form.image_url = ask(ctx.console, "Image URL (optional): ").await?;

    let item = match form.validate() {
        Ok(item) => item,
        Err(error) => {
            report_form_error(ctx.console, Route::AddToMenu, &error).await?;
            return Ok(Transition::Stay);
        }
    };

    let name = item.name.clone();
    let course = item.course;
    let id = ctx.store.add_menu_item(item);
    screen_info!(Route::AddToMenu, id = %id, dish = %name, course = %course, "Dish added");
    ctx.console
        .alert("Success", &format!("{name} added to {course} menu."))
        .await?;
    Ok(Transition::Navigate(Route::OwnerDashboard))
}
