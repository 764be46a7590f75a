/*!
Callbacks associated with a context.

# Callback types

Callbacks may be mutable functions.
Still, information passed from an analysis is non-mutable.

- [CallbackWarshall] is called after each step of closing a relation, with a record of the step.
*/

use super::Context;

pub use crate::procedures::closure::CallbackWarshall;

impl Context {
    /// Sets the callback called after each step of closing the relation of the context.
    pub fn set_callback_warshall(&mut self, callback: Box<CallbackWarshall>) {
        self.callback_warshall = Some(callback);
    }

    /// Removes any callback called after each step of closing the relation of the context.
    pub fn clear_callback_warshall(&mut self) {
        self.callback_warshall = None;
    }
}
