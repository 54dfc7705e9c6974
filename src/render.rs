//! A level-by-level text diagram of a treap, meant for eyeballing its shape.
//!
//! Every level of the tree is drawn on one line of dashes. Each node is printed as
//! `(key, priority)` and absent children keep their slot so that children stay roughly below
//! their parents.

use crate::treap::{NodeView, Treap};
use std::fmt;

const LINE_WIDTH: usize = 80;
const FILL: &str = "-";

fn render_level<T>(level: &[Option<NodeView<T>>]) -> String
where
    T: fmt::Display,
{
    let mut cells = vec![FILL.to_string(); LINE_WIDTH];
    for (i, slot) in level.iter().enumerate() {
        let position = (i + 1) * LINE_WIDTH / (level.len() + 1);
        if let Some(node) = slot {
            cells[position] = format!("({}, {})", node.key(), node.priority());
        }
    }
    cells.concat()
}

impl<T, S> fmt::Display for Treap<T, S>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut level = match self.root() {
            Some(root) => vec![Some(root)],
            None => return write!(f, "Treap is empty"),
        };

        while level.iter().any(Option::is_some) {
            writeln!(f, "{}", render_level(&level))?;
            level = level
                .iter()
                .flat_map(|slot| match slot {
                    Some(node) => vec![node.left(), node.right()],
                    None => vec![None, None],
                })
                .collect();
        }
        Ok(())
    }
}
