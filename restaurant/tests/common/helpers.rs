//! Test helpers and builder patterns for restaurant tests

use std::collections::VecDeque;

use async_trait::async_trait;
use restaurant::*;
use shared::{CatalogId, ItemId};

use super::fixtures::TestFixtures;

/// Console fed from a fixed script that records everything shown
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    pub output: Vec<String>,
    pub prompts: Vec<String>,
    pub alerts: Vec<(String, String)>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Everything shown, joined into one transcript
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn alert_titles(&self) -> Vec<&str> {
        self.alerts.iter().map(|(title, _)| title.as_str()).collect()
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn show(&mut self, text: &str) -> RestaurantResult<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    async fn read_line(&mut self, prompt: &str) -> RestaurantResult<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    async fn alert(&mut self, title: &str, message: &str) -> RestaurantResult<()> {
        self.alerts.push((title.to_string(), message.to_string()));
        Ok(())
    }
}

/// Deterministic identifiers: `new-1`, `new-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    issued: u32,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        self.issued += 1;
        ItemId::new(format!("new-{}", self.issued))
    }
}

/// App type used throughout the suites
pub type TestApp = App<ScriptedConsole, SequentialIds>;

/// Builder for apps driven by a script
pub struct AppBuilder {
    config: AppConfig,
    script: Vec<String>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig {
                owner: TestFixtures::owner(),
                ..AppConfig::default()
            },
            script: Vec::new(),
        }
    }

    pub fn with_catalog(mut self, catalog: CatalogId) -> Self {
        self.config.initial_catalog = catalog;
        self
    }

    pub fn with_owner(mut self, owner: OwnerCredentials) -> Self {
        self.config.owner = owner;
        self
    }

    /// Append input lines
    pub fn with_input<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> TestApp {
        App::new(&self.config, ScriptedConsole::new(self.script), SequentialIds::default())
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Store on the first menu with deterministic ids
    pub fn store() -> MenuStore<SequentialIds> {
        MenuStore::new(CatalogId::One, SequentialIds::default())
    }

    /// Run a scripted session to completion
    pub async fn run_session(mut app: TestApp) -> TestApp {
        app.run().await.unwrap();
        app
    }

    pub fn order_ids(app: &TestApp) -> Vec<String> {
        app.store().order().iter().map(|item| item.id.to_string()).collect()
    }
}
