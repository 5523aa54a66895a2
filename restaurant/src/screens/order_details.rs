//! Current order with its total

use shared::{ItemId, screen_info};

use super::{ScreenContext, ask, split_command, unknown_command};
use crate::error::RestaurantResult;
use crate::navigation::{Route, Transition};
use crate::traits::{Console, IdGenerator};

pub async fn run<C, G>(ctx: &mut ScreenContext<'_, C, G>) -> RestaurantResult<Transition>
where
    C: Console,
    G: IdGenerator,
{
    let mut lines = Vec::new();
    if ctx.store.order().is_empty() {
        lines.push("Your order is empty.".to_string());
    }
    for (i, item) in ctx.store.order().iter().enumerate() {
        lines.push(format!("  {:>2}. {:<32} {:>8}   [id {}]", i + 1, item.name, item.price.to_string(), item.id));
    }
    lines.push(format!("Total: {}", ctx.store.order_total()));
    lines.push(String::new());
    lines.push("r <id>) Remove dish   c) Close order   b) Back".to_string());
    ctx.console.show(&lines.join("\n")).await?;

    let line = ask(ctx.console, "> ").await?;
    let (command, argument) = split_command(&line);
    match command.as_str() {
        "r" | "remove" => {
            let removed = ctx.store.remove_from_order(&ItemId::from(argument));
            if removed > 0 {
                ctx.console
                    .show(&format!("Removed {removed} entr{} from your order.", if removed == 1 { "y" } else { "ies" }))
                    .await?;
            }
            Ok(Transition::Stay)
        }
        "c" | "close" => {
            screen_info!(
                Route::OrderDetails,
                items = ctx.store.order_count(),
                total = %ctx.store.order_total(),
                "Order closed"
            );
            ctx.store.clear_order();
            Ok(Transition::Navigate(Route::Welcome))
        }
        "b" | "back" => Ok(Transition::Back),
        _ => unknown_command(ctx.console, &line).await,
    }
}
