use super::Expr;

/// Walks an expression tree left-to-right in post-order, so every node comes after all of its
/// children. Uses an explicit stack instead of recursion.
///
/// Created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    /// Nodes still to be yielded. The flag is set once the children of the node have been pushed
    /// above it.
    pending: Vec<(&'a Expr, bool)>,
}

impl<'a> ExprIter<'a> {
    pub fn new(expr: &'a Expr) -> Self {
        Self { pending: vec![(expr, false)] }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, expanded) = self.pending.pop()?;
            if expanded {
                return Some(expr);
            }

            self.pending.push((expr, true));
            self.pending.extend(expr.children().into_iter().rev().map(|child| (child, false)));
        }
    }
}
