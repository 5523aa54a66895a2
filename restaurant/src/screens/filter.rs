//! Dishes of a single course

use shared::{Course, MenuItem, screen_debug};

use super::{ScreenContext, ask, choose_course, order_badge, pick, split_command};
use crate::error::RestaurantResult;
use crate::navigation::{Route, Transition};
use crate::traits::{Console, IdGenerator};

pub async fn run<C, G>(ctx: &mut ScreenContext<'_, C, G>) -> RestaurantResult<Transition>
where
    C: Console,
    G: IdGenerator,
{
    let mut course = Course::Starter;

    loop {
        let filtered: Vec<MenuItem> = ctx.store.items_for_course(course).cloned().collect();

        let mut lines = vec![format!("Showing: {}", course.plural_label())];
        if filtered.is_empty() {
            lines.push("  No items available.".to_string());
        }
        for (i, item) in filtered.iter().enumerate() {
            lines.push(format!("  {:>2}. {}", i + 1, item.label()));
            lines.push(format!("      {}", item.description));
        }
        lines.push(String::new());
        lines.push(format!(
            "c) Change course   a <n>) Add to order   o) {}   h) Help   b) Back",
            order_badge(ctx.store.order_count())
        ));
        ctx.console.show(&lines.join("\n")).await?;

        let line = ask(ctx.console, "> ").await?;
        let (command, argument) = split_command(&line);
        match command.as_str() {
            "c" | "course" => {
                if let Some(picked) = choose_course(ctx.console, Some(course)).await? {
                    course = picked;
                }
            }
            "a" | "add" => {
                let refs: Vec<&MenuItem> = filtered.iter().collect();
                match pick(&refs, argument).cloned() {
                    Some(item) => {
                        let name = item.name.clone();
                        ctx.store.add_to_order(item);
                        screen_debug!(Route::Filter, dish = %name, course = %course, "Added to order");
                        ctx.console
                            .show(&format!("Added {name} to your order ({} items).", ctx.store.order_count()))
                            .await?;
                    }
                    None => ctx.console.show("Choose a dish number from the list.").await?,
                }
            }
            "o" | "order" => return Ok(Transition::Navigate(Route::OrderDetails)),
            "h" | "help" => return Ok(Transition::Navigate(Route::Help)),
            "b" | "back" => return Ok(Transition::Back),
            _ => {
                ctx.console.show(&format!("Unknown option: {}", line.trim())).await?;
            }
        }
    }
}
