//! Interactive command loop over the item store.
//!
//! # Responsibility
//! - Own ephemeral view state: the selected sort mode and form parsing.
//! - Validate form input at the boundary; the store trusts what it is given.
//! - Resolve row numbers against the currently displayed sequence.
//!
//! # Invariants
//! - Empty descriptions never reach the store; the submission is silently
//!   dropped.
//! - `clear` calls the store only after a positive confirmation.
//! - Stale or out-of-range row numbers degrade to no-ops.

use crate::confirm::ConfirmPrompt;
use faraway_core::{
    display_order, packing_stats, IdSource, Item, ItemId, ItemStore, PackingStats, SortMode,
    QUANTITY_MAX, QUANTITY_MIN,
};
use log::debug;
use std::io::{self, Write};

/// What the loop should do after handling one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Parsed entry-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormInput {
    Accepted { quantity: u8, description: String },
    EmptyDescription,
    QuantityOutOfRange(u32),
}

/// View-layer state driving one store.
pub struct App<G: IdSource, C: ConfirmPrompt> {
    store: ItemStore<G>,
    sort_mode: SortMode,
    confirm: C,
}

impl<G: IdSource, C: ConfirmPrompt> App<G, C> {
    pub fn new(store: ItemStore<G>, confirm: C) -> Self {
        Self {
            store,
            sort_mode: SortMode::default(),
            confirm,
        }
    }

    /// Current store snapshot, for rendering and assertions.
    pub fn store(&self) -> &ItemStore<G> {
        &self.store
    }

    /// Currently selected display ordering.
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Handles one input line; notices go to `out`, state changes go to the
    /// store or the view-local sort mode.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Outcome> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Outcome::Continue);
        }

        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        match command {
            "add" => self.handle_add(rest, out)?,
            "toggle" | "t" => self.handle_row_command(rest, RowCommand::Toggle, out)?,
            "delete" | "del" => self.handle_row_command(rest, RowCommand::Delete, out)?,
            "sort" => self.handle_sort(rest, out)?,
            "clear" => self.handle_clear(),
            "list" => {}
            "help" => write_help(out)?,
            "quit" | "q" | "exit" => return Ok(Outcome::Quit),
            other => {
                writeln!(out, "unknown command `{other}`; type `help` for commands")?;
            }
        }

        Ok(Outcome::Continue)
    }

    /// Renders the display sequence and the stats footer.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let view = display_order(self.store.items(), self.sort_mode);
        for (index, item) in view.iter().enumerate() {
            writeln!(out, "{:>3}. {}", index + 1, format_row(item))?;
        }
        if !view.is_empty() {
            writeln!(out, "sort: {}", self.sort_mode.as_str())?;
        }
        writeln!(out, "{}", stats_line(&packing_stats(self.store.items())))?;
        Ok(())
    }

    fn handle_add(&mut self, input: &str, out: &mut impl Write) -> io::Result<()> {
        match parse_form_input(input) {
            FormInput::Accepted {
                quantity,
                description,
            } => {
                self.store.add(description, quantity);
            }
            FormInput::EmptyDescription => {
                // The form refuses empty submissions without comment.
                debug!("event=form_rejected module=cli reason=empty_description");
            }
            FormInput::QuantityOutOfRange(quantity) => {
                debug!("event=form_rejected module=cli reason=quantity_out_of_range value={quantity}");
                writeln!(
                    out,
                    "quantity must be between {QUANTITY_MIN} and {QUANTITY_MAX}, got {quantity}"
                )?;
            }
        }
        Ok(())
    }

    fn handle_row_command(
        &mut self,
        input: &str,
        command: RowCommand,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let row = match input.parse::<usize>() {
            Ok(row) => row,
            Err(_) => {
                writeln!(out, "usage: {} <row>", command.name())?;
                return Ok(());
            }
        };

        // A row that no longer exists resolves to nothing and the command
        // degrades to a no-op, matching the store's unknown-id semantics.
        if let Some(id) = self.row_to_id(row) {
            match command {
                RowCommand::Toggle => self.store.toggle(id),
                RowCommand::Delete => self.store.delete(id),
            }
        }
        Ok(())
    }

    fn handle_sort(&mut self, input: &str, out: &mut impl Write) -> io::Result<()> {
        match SortMode::parse(input) {
            Ok(mode) => {
                self.sort_mode = mode;
                debug!("event=sort_mode_changed module=cli mode={}", mode.as_str());
            }
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(())
    }

    fn handle_clear(&mut self) {
        if self.confirm.confirm("Clear the whole list?") {
            self.store.clear_all();
        } else {
            debug!("event=clear_declined module=cli");
        }
    }

    fn row_to_id(&self, row: usize) -> Option<ItemId> {
        let view = display_order(self.store.items(), self.sort_mode);
        let index = row.checked_sub(1)?;
        view.get(index).map(|item| item.id)
    }
}

#[derive(Debug, Clone, Copy)]
enum RowCommand {
    Toggle,
    Delete,
}

impl RowCommand {
    fn name(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Delete => "delete",
        }
    }
}

/// Parses the text after `add`: an optional leading quantity, then the
/// description.
///
/// A leading token that parses as an integer is taken as the quantity and
/// must be in `[QUANTITY_MIN, QUANTITY_MAX]`; without one the quantity
/// defaults to `QUANTITY_MIN`.
fn parse_form_input(input: &str) -> FormInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return FormInput::EmptyDescription;
    }

    let (first, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (trimmed, ""),
    };

    match first.parse::<u32>() {
        Ok(quantity) => {
            if !(u32::from(QUANTITY_MIN)..=u32::from(QUANTITY_MAX)).contains(&quantity) {
                return FormInput::QuantityOutOfRange(quantity);
            }
            if rest.is_empty() {
                return FormInput::EmptyDescription;
            }
            FormInput::Accepted {
                quantity: quantity as u8,
                description: rest.to_string(),
            }
        }
        Err(_) => FormInput::Accepted {
            quantity: QUANTITY_MIN,
            description: trimmed.to_string(),
        },
    }
}

fn format_row(item: &Item) -> String {
    let mark = if item.packed { 'x' } else { ' ' };
    format!("[{mark}] {:>2}  {}", item.quantity, item.description)
}

fn stats_line(stats: &PackingStats) -> String {
    match stats.percentage {
        None => "Start adding some items to your packing list.".to_string(),
        Some(100) => "You got everything! Ready to go.".to_string(),
        Some(percentage) => {
            let noun = if stats.total == 1 { "item" } else { "items" };
            format!(
                "You have {} {noun} on your list, and you already packed {} ({percentage}%).",
                stats.total, stats.packed
            )
        }
    }
}

fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "commands:")?;
    writeln!(out, "  add [quantity] <description>   add an item (quantity {QUANTITY_MIN}-{QUANTITY_MAX}, default {QUANTITY_MIN})")?;
    writeln!(out, "  toggle <row>                   flip the packed flag")?;
    writeln!(out, "  delete <row>                   remove an item")?;
    writeln!(out, "  sort input|description|packed  change the display order")?;
    writeln!(out, "  clear                          remove all items (asks first)")?;
    writeln!(out, "  list                           redraw the list")?;
    writeln!(out, "  quit                           leave")?;
    Ok(())
}
