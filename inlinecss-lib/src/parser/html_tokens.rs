//! Scanning an HTML fragment with the html5ever tokenizer.
//!
//! Unlike the pattern scanner this understands attribute quoting and markup
//! structure: `class='a'` and `class=a` are both seen, tags inside comments
//! are not, and tag names come back lowercased.

use crate::parser::HtmlInventory;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use log::debug;
use std::cell::RefCell;

/// A token sink that only records start tags and their class attributes.
#[derive(Default)]
struct InventorySink {
    inventory: RefCell<HtmlInventory>,
}

impl TokenSink for InventorySink {
    type Handle = ();

    fn process_token(&self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(Tag {
                kind: TagKind::StartTag,
                name,
                attrs,
                ..
            }) => {
                let mut inventory = self.inventory.borrow_mut();
                for attr in attrs.iter().filter(|a| &*a.name.local == "class") {
                    inventory
                        .classes
                        .extend(attr.value.split_whitespace().map(str::to_string));
                }
                inventory.elements.insert(name.to_string());
            }
            Token::ParseError(msg) => {
                debug!("HTML parse error on line {}: {}", line_number, msg);
            }
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Collect class and tag names from `html`.
pub fn scan(html: &str) -> HtmlInventory {
    let tokenizer = Tokenizer::new(InventorySink::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    // The sink never asks for script execution, so one feed drains the queue.
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.inventory.take()
}
