//! Line-oriented driver standing in for the views of the demo hierarchy.
//!
//! Each command plays the part of a button or gesture in one of the scene
//! views. Views talk to the store through scoped senders, so a command aimed
//! at a scene that is no longer shown is still delivered, addressed to the old
//! route, exactly like a view that has not caught up with the state yet.
//!
//! ```text
//! present a|b          push an intermediate scene
//! back a|b             pop it (navigation-link dismissal)
//! a|b leaf             show the leaf sheet of intermediate a|b
//! a|b close-leaf       swipe the leaf sheet away
//! a|b dismiss          Dismiss button of intermediate a|b
//! a|b leaf dismiss     Dismiss button of the leaf under intermediate a|b
//! open <url>           deep link
//! show                 print the scene tree
//! diagnostics          print the stale-route drops recorded so far
//! ```

use std::io;
use std::str::FromStr;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::ui::deep_link::{DeepLinkAdapter, DeepLinkError};
use crate::ui::presentation::PresentationBinding;
use crate::ui::route::{RouteCase, Routed};
use crate::ui::scenes::app::{
    AppIntent, AppReducer, AppRouteIntent, AppRouteTag, AppState, IntermediateACase,
    IntermediateBCase,
};
use crate::ui::scenes::intermediate::{IntermediateIntent, IntermediateState, LeafCase};
use crate::ui::scenes::leaf::LeafIntent;
use crate::ui::store::{DiagnosticLog, ScopedSender, StateHandle, Store, StoreError, StoreSender};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    DeepLink(#[from] DeepLinkError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Present(AppRouteTag),
    Back(AppRouteTag),
    ShowLeaf(AppRouteTag),
    CloseLeaf(AppRouteTag),
    DismissIntermediate(AppRouteTag),
    DismissLeaf(AppRouteTag),
    Open(String),
    Show,
    Diagnostics,
}

fn parse_tag(word: &str) -> Result<AppRouteTag, ConsoleError> {
    match word {
        "a" | "A" => Ok(AppRouteTag::IntermediateA),
        "b" | "B" => Ok(AppRouteTag::IntermediateB),
        other => Err(ConsoleError::UnknownCommand(other.to_string())),
    }
}

impl FromStr for ConsoleCommand {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["present"] | ["back"] => Err(ConsoleError::MissingArgument("a or b")),
            ["open"] => Err(ConsoleError::MissingArgument("url")),
            ["present", scene] => Ok(Self::Present(parse_tag(scene)?)),
            ["back", scene] => Ok(Self::Back(parse_tag(scene)?)),
            ["open", url] => Ok(Self::Open((*url).to_string())),
            ["show"] => Ok(Self::Show),
            ["diagnostics"] => Ok(Self::Diagnostics),
            [scene, "leaf"] => Ok(Self::ShowLeaf(parse_tag(scene)?)),
            [scene, "close-leaf"] => Ok(Self::CloseLeaf(parse_tag(scene)?)),
            [scene, "dismiss"] => Ok(Self::DismissIntermediate(parse_tag(scene)?)),
            [scene, "leaf", "dismiss"] => Ok(Self::DismissLeaf(parse_tag(scene)?)),
            _ => Err(ConsoleError::UnknownCommand(line.trim().to_string())),
        }
    }
}

/// One line per active scene, root first.
pub fn render(state: &AppState) -> String {
    let mut out = String::from("AppScene");
    let intermediate = state.intermediate_a().or(state.intermediate_b());
    if let Some(intermediate) = intermediate {
        out.push_str(&format!(" > Intermediate {}", intermediate.letter_id));
        if let Some(leaf) = intermediate.leaf() {
            out.push_str(&format!(" > Leaf {}", leaf.letter_id));
        }
    }
    out
}

pub struct Console {
    adapter: DeepLinkAdapter,
    app: StoreSender<AppIntent>,
    state: StateHandle<AppState>,
    diagnostics: DiagnosticLog,
}

impl Console {
    pub fn new(adapter: DeepLinkAdapter, store: &Store<AppReducer>) -> Self {
        Self {
            adapter,
            app: store.sender(),
            state: store.state(),
            diagnostics: store.diagnostic_log(),
        }
    }

    /// Run one command. Returns text to print, if any.
    pub fn execute(&self, command: ConsoleCommand) -> Result<Option<String>, ConsoleError> {
        match command {
            ConsoleCommand::Present(tag) => self.push_binding(tag, true),
            ConsoleCommand::Back(tag) => self.push_binding(tag, false),
            ConsoleCommand::ShowLeaf(tag) => self.sheet_binding(tag, true),
            ConsoleCommand::CloseLeaf(tag) => self.sheet_binding(tag, false),
            ConsoleCommand::DismissIntermediate(tag) => {
                self.intermediate(tag).send(IntermediateIntent::Dismiss)?;
                Ok(None)
            }
            ConsoleCommand::DismissLeaf(tag) => {
                self.leaf(tag).send(LeafIntent::Dismiss)?;
                Ok(None)
            }
            ConsoleCommand::Open(url) => {
                self.app.send(self.adapter.intent_for(&url)?)?;
                Ok(None)
            }
            ConsoleCommand::Show => Ok(Some(self.state.read(render))),
            ConsoleCommand::Diagnostics => Ok(Some(self.describe_diagnostics())),
        }
    }

    fn describe_diagnostics(&self) -> String {
        let diagnostics = self.diagnostics.snapshot();
        if diagnostics.is_empty() {
            return "no diagnostics".to_string();
        }
        diagnostics
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push_binding(
        &self,
        tag: AppRouteTag,
        presented: bool,
    ) -> Result<Option<String>, ConsoleError> {
        let current = self.state.read(|state| state.route_tag());
        match PresentationBinding::<AppIntent>::push(current, tag).set(presented) {
            Some(intent) => {
                self.app.send(intent)?;
                Ok(None)
            }
            None => Ok(Some("nothing to do".to_string())),
        }
    }

    fn sheet_binding(
        &self,
        tag: AppRouteTag,
        presented: bool,
    ) -> Result<Option<String>, ConsoleError> {
        let current = self
            .state
            .read(|state| intermediate_for(state, tag).and_then(Routed::route_tag));
        let binding = PresentationBinding::<IntermediateIntent>::sheet(current, LeafCase::TAG);
        match binding.set(presented) {
            Some(intent) => {
                self.intermediate(tag).send(intent)?;
                Ok(None)
            }
            None => Ok(Some("nothing to do".to_string())),
        }
    }

    fn intermediate(&self, tag: AppRouteTag) -> ScopedSender<IntermediateIntent, AppIntent> {
        let embed: fn(IntermediateIntent) -> AppRouteIntent = match tag {
            AppRouteTag::IntermediateA => IntermediateACase::embed,
            AppRouteTag::IntermediateB => IntermediateBCase::embed,
        };
        self.app.scope(move |intent| AppIntent::Route(embed(intent)))
    }

    fn leaf(&self, tag: AppRouteTag) -> ScopedSender<LeafIntent, AppIntent> {
        self.intermediate(tag)
            .scope(|intent| IntermediateIntent::Route(LeafCase::embed(intent)))
    }
}

fn intermediate_for(state: &AppState, tag: AppRouteTag) -> Option<&IntermediateState> {
    match tag {
        AppRouteTag::IntermediateA => state.intermediate_a(),
        AppRouteTag::IntermediateB => state.intermediate_b(),
    }
}

/// Run every command read from `input`, one at a time.
///
/// The store reduces whatever a command sent before the next line is read, so
/// each command sees the state left by the one before it. `out` receives the
/// command output, errors and the scene tree after every change.
pub async fn drive<In>(
    input: In,
    console: &Console,
    store: &mut Store<AppReducer>,
    mut out: impl FnMut(String),
) -> io::Result<()>
where
    In: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let result = line
            .parse::<ConsoleCommand>()
            .and_then(|command| console.execute(command));
        match result {
            Ok(Some(text)) => out(text),
            Ok(None) => {}
            Err(err) => out(format!("error: {err}")),
        }

        if store.process_pending() > 0 {
            out(store.state().read(render));
        }
    }
    Ok(())
}
