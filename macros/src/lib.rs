//  LIB.rs
//    by Lut99
//
//  Created:
//    16 Oct 2026, 10:12:09
//  Last edited:
//    17 Oct 2026, 12:25:33
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the `dfa!{}`-macro for the `finite-automata`-crate.
//

// Modules
mod dfa;

// Imports
use proc_macro::TokenStream;
use syn::parse::Parser as _;


/***** LIBRARY *****/
/// Defines a DFA in a table-like notation.
///
/// # Syntax
/// ```ignore
/// dfa! {
///     // Optional; uses `crate::` instead of `::finite_automata::` paths
///     #![crate]
///
///     // All of these are optional, and may be given in any order
///     states: { 0, 1, 2 };
///     alphabet: { 'a', 'b' };
///     start: 0;
///     accepting: { 2 };
///
///     // Transitions, written as `(state, symbol) => target;`
///     (0, 'a') => 1;
///     (1, 'b') => 2;
/// }
/// ```
/// Every state and symbol may be an arbitrary Rust expression.
///
/// # Returns
/// An expression evaluating to a `Result<Dfa<Q, A>, DefinitionError<Q, A>>`, as if the definition
/// was given to a `DfaBuilder` and then built.
#[proc_macro]
pub fn dfa(input: TokenStream) -> TokenStream {
    match dfa::dfa.parse2(input.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
