//  DFA.rs
//    by Lut99
//
//  Created:
//    16 Oct 2026, 10:14:50
//  Last edited:
//    17 Oct 2026, 12:25:01
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the [`dfa!()`]-macro.
//

use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote, quote_spanned};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned as _;
use syn::token::{Comma, Paren};
use syn::{Attribute, Error, Expr, Ident, Path, Token, braced, parenthesized, parse_quote};


/***** HELPER FUNCTIONS *****/
/// Parses a comma-separated list of expressions wrapped in curly brackets.
///
/// # Arguments
/// - `input`: The [`ParseStream`] to parse from.
///
/// # Returns
/// A [`Punctuated`] with the parsed expressions. May be empty.
///
/// # Errors
/// This function errors if the input was not a curly-bracketed list of expressions.
fn parse_set(input: ParseStream) -> syn::Result<Punctuated<Expr, Comma>> {
    let content;
    braced!(content in input);
    Punctuated::parse_terminated(&content)
}





/***** AST *****/
/// The inner attributes given to the macro.
struct DfaAttributes {
    /// The path to the `finite-automata`-crate.
    crate_path: Path,
}
impl Parse for DfaAttributes {
    #[inline]
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut crate_path: Path = parse_quote!(::finite_automata);
        for attr in input.call(Attribute::parse_inner)? {
            if attr.path().is_ident("crate") {
                attr.meta.require_path_only()?;
                crate_path = parse_quote!(crate);
            } else {
                return Err(Error::new(attr.span(), format!("Unknown attribute '{}'", attr.path().to_token_stream())));
            }
        }
        Ok(Self { crate_path })
    }
}



/// One of the things that can be given in the macro.
enum Section {
    /// `states: { ... };`
    States(Ident, Punctuated<Expr, Comma>),
    /// `alphabet: { ... };`
    Alphabet(Ident, Punctuated<Expr, Comma>),
    /// `start: ...;`
    Start(Ident, Expr),
    /// `accepting: { ... };`
    Accepting(Ident, Punctuated<Expr, Comma>),
    /// `(..., ...) => ...;`
    Transition(Transition),
}
impl Parse for Section {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        // Transitions are the only ones starting with parenthesis
        if input.peek(Paren) {
            return Ok(Self::Transition(input.parse()?));
        }

        // Otherwise, it's a named section
        let name: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let section: Self = match name.to_string().as_str() {
            "states" => {
                let states = parse_set(input)?;
                Self::States(name, states)
            },
            "alphabet" => {
                let alphabet = parse_set(input)?;
                Self::Alphabet(name, alphabet)
            },
            "start" => {
                let start: Expr = input.parse()?;
                Self::Start(name, start)
            },
            "accepting" => {
                let accepting = parse_set(input)?;
                Self::Accepting(name, accepting)
            },
            _ => {
                return Err(Error::new(
                    name.span(),
                    format!("Unknown section '{name}' (expected 'states', 'alphabet', 'start', 'accepting' or a transition)"),
                ));
            },
        };
        input.parse::<Token![;]>()?;
        Ok(section)
    }
}
impl ToTokens for Section {
    /// Serializes the section as a call on a `DfaBuilder`.
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        tokens.extend(match self {
            Self::States(name, states) => {
                let states = states.iter();
                quote_spanned! { name.span() => .states([#(#states),*]) }
            },
            Self::Alphabet(name, alphabet) => {
                let alphabet = alphabet.iter();
                quote_spanned! { name.span() => .alphabet([#(#alphabet),*]) }
            },
            Self::Start(name, start) => quote_spanned! { name.span() => .start(#start) },
            Self::Accepting(name, accepting) => {
                let accepting = accepting.iter();
                quote_spanned! { name.span() => .accepting([#(#accepting),*]) }
            },
            Self::Transition(trans) => trans.to_token_stream(),
        });
    }
}

/// Represents a single transition.
struct Transition {
    /// The parenthesis wrapping the state and symbol.
    paren:  Paren,
    /// The state to transition from.
    state:  Expr,
    /// The symbol to transition on.
    symbol: Expr,
    /// The state to transition to.
    target: Expr,
}
impl Parse for Transition {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        // Parse the `(state, symbol)` first
        let content;
        let paren: Paren = parenthesized!(content in input);
        let state: Expr = content.parse()?;
        content.parse::<Token![,]>()?;
        let symbol: Expr = content.parse()?;
        if content.peek(Token![,]) {
            content.parse::<Token![,]>()?;
        }
        if !content.is_empty() {
            return Err(content.error("Expected exactly one state and one symbol"));
        }

        // Then the arrow and the target
        input.parse::<Token![=>]>()?;
        let target: Expr = input.parse()?;
        input.parse::<Token![;]>()?;
        Ok(Self { paren, state, symbol, target })
    }
}
impl ToTokens for Transition {
    #[inline]
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let Self { paren, state, symbol, target } = self;
        tokens.extend(quote_spanned! { paren.span.join() => .transition(#state, #symbol, #target) });
    }
}





/***** LIBRARY *****/
/// Implements the `dfa!()`-macro.
///
/// # Arguments
/// - `input`: The input tokens to parse, as a [`ParseStream`].
///
/// # Returns
/// A [`TokenStream2`] that contains the translated tokens.
///
/// # Errors
/// This function may error if the input had an invalid stream of tokens for a DFA definition.
pub fn dfa(input: ParseStream) -> Result<TokenStream2, Error> {
    // Parse from the input first: attributes
    let attrs: DfaAttributes = input.parse()?;

    // Then all the sections
    let mut sections: Vec<Section> = Vec::new();
    let mut has_start: bool = false;
    while !input.is_empty() {
        let section: Section = input.parse()?;
        if let Section::Start(name, _) = &section {
            if has_start {
                return Err(Error::new(name.span(), "Duplicate 'start' section"));
            }
            has_start = true;
        }
        sections.push(section);
    }

    // Write them as builder calls
    let crate_path: &Path = &attrs.crate_path;
    Ok(quote! {
        #crate_path::dfa::Dfa::builder()
            #(#sections)*
            .build()
    })
}
