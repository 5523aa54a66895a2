//! Owner dashboard: entry point to menu management

use super::{ScreenContext, ask, unknown_command};
use crate::error::RestaurantResult;
use crate::navigation::{Route, Transition};
use crate::traits::{Console, IdGenerator};

pub async fn run<C, G>(ctx: &mut ScreenContext<'_, C, G>) -> RestaurantResult<Transition>
where
    C: Console,
    G: IdGenerator,
{
    let summary = format!(
        "Managing: {} | Total Dishes: {}\n\n1) View Menu   2) Add to Menu   3) Remove from Menu   4) Reset Menu   0) Back",
        ctx.store.current_catalog(),
        ctx.store.dish_count()
    );
    ctx.console.show(&summary).await?;

    let choice = ask(ctx.console, "> ").await?;
    match choice.trim() {
        "1" => Ok(Transition::Navigate(Route::Menu)),
        "2" => Ok(Transition::Navigate(Route::AddToMenu)),
        "3" => Ok(Transition::Navigate(Route::RemoveFromMenu)),
        "4" => Ok(Transition::Navigate(Route::ResetConfirmation)),
        "0" | "b" => Ok(Transition::Back),
        _ => unknown_command(ctx.console, &choice).await,
    }
}
