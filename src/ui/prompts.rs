//! Interactive prompts with CI/non-interactive fallback

use super::context::UiContext;
use crate::error::{IccError, IccResult};
use std::io::{self, Write};

/// Prompt for confirmation, returns default if non-interactive or auto-yes
pub async fn confirm(ctx: &UiContext, message: &str, default: bool) -> IccResult<bool> {
    // Auto-yes mode bypasses prompts
    if ctx.auto_yes() {
        println!("  {} (auto-approved)", message);
        return Ok(true);
    }

    // Non-interactive mode returns default
    if !ctx.is_interactive() {
        return Ok(default);
    }

    // Run blocking cliclack prompt in spawn_blocking
    let message = message.to_string();
    let result = tokio::task::spawn_blocking(move || {
        cliclack::confirm(&message)
            .initial_value(default)
            .interact()
    })
    .await
    .map_err(|e| IccError::Prompt(format!("Prompt task failed: {}", e)))?;

    result.map_err(|e| IccError::Prompt(format!("Prompt failed: {}", e)))
}

/// Hold the console open until the operator presses Enter.
///
/// No-op outside an interactive terminal. The tool is commonly launched
/// in a console window that closes on process exit; diagnostics must
/// stay on screen until acknowledged.
pub fn pause(ctx: &UiContext) {
    if !ctx.is_interactive() {
        return;
    }

    print!("Press Enter to exit");
    if io::stdout().flush().is_err() {
        return;
    }
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
}
