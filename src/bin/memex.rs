//! memex CLI - grep, read and ls over a document corpus
//!
//! # Examples
//!
//! ```bash
//! # Search the corpus in the current directory
//! memex grep "refund"
//!
//! # Scope a search to one subtree
//! memex --root ./help-center grep "reset|refund" --glob "billing/**"
//!
//! # Read lines 10-29 of a document
//! memex read billing/refund.md --offset 10 --limit 20
//!
//! # Call a tool the way an LLM would
//! memex call ls '{"path": "billing"}'
//! ```

use clap::Parser;
use memex::cli::output::print_error;
use memex::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
