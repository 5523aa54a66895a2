//! Customer menu: every course with its dishes

use shared::{Course, screen_debug};

use super::{ScreenContext, ask, course_ordered, order_badge, pick, split_command, unknown_command};
use crate::error::RestaurantResult;
use crate::navigation::{Route, Transition};
use crate::traits::{Console, IdGenerator};

pub async fn run<C, G>(ctx: &mut ScreenContext<'_, C, G>) -> RestaurantResult<Transition>
where
    C: Console,
    G: IdGenerator,
{
    let mut lines = vec![format!(
        "Currently Viewing: {} | Total Dishes: {}",
        ctx.store.current_catalog(),
        ctx.store.dish_count()
    )];

    let mut number = 0;
    for course in Course::ALL {
        lines.push(format!("--- {} ---", course.plural_label()));
        let mut any = false;
        for item in ctx.store.items_for_course(course) {
            number += 1;
            any = true;
            lines.push(format!("  {number:>2}. {}", item.label()));
        }
        if !any {
            lines.push("  No items available.".to_string());
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "a <n>) Add to order   v <n>) View dish   f) Filter   o) {}   h) Help   b) Back",
        order_badge(ctx.store.order_count())
    ));
    ctx.console.show(&lines.join("\n")).await?;

    let line = ask(ctx.console, "> ").await?;
    let (command, argument) = split_command(&line);
    match command.as_str() {
        "a" | "add" => {
            let picked = pick(&course_ordered(ctx.store), argument).cloned();
            match picked {
                Some(item) => {
                    let name = item.name.clone();
                    ctx.store.add_to_order(item);
                    screen_debug!(Route::Menu, dish = %name, "Added to order");
                    ctx.console
                        .show(&format!("Added {name} to your order ({} items).", ctx.store.order_count()))
                        .await?;
                }
                None => ctx.console.show("Choose a dish number from the list.").await?,
            }
            Ok(Transition::Stay)
        }
        "v" | "view" => {
            let details = pick(&course_ordered(ctx.store), argument).map(|item| {
                let image = item
                    .image
                    .as_ref()
                    .map(|image| image.to_string())
                    .unwrap_or_else(|| "no image".to_string());
                format!("{}\n  {}\n  Course: {}\n  Image: {}", item.label(), item.description, item.course, image)
            });
            let text = details.unwrap_or_else(|| "Choose a dish number from the list.".to_string());
            ctx.console.show(&text).await?;
            Ok(Transition::Stay)
        }
        "f" | "filter" => Ok(Transition::Navigate(Route::Filter)),
        "o" | "order" => Ok(Transition::Navigate(Route::OrderDetails)),
        "h" | "help" => Ok(Transition::Navigate(Route::Help)),
        "b" | "back" => Ok(Transition::Back),
        _ => unknown_command(ctx.console, &line).await,
    }
}
