//! Terminal rendering of a trace forest.
//!
//! Draws the tree with box-drawing guides, one line per visible node.
//! Collapsed nodes hide their children; search hits are marked and their
//! ancestors emphasized.

use super::highlight::{tokenize, SpanKind};
use crate::parser::TraceNode;
use crate::session::TraceSession;
use crate::utils::config::DEFAULT_DEPTH_COLORS;
use colored::{Color, Colorize};
use std::collections::HashSet;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Colors for tree guides, indexed by nesting level
    pub depth_colors: Vec<Color>,
    /// Emit ANSI colors
    pub color: bool,
    /// Deepest tree level drawn; deeper nodes are folded away
    pub max_depth: Option<usize>,
    /// Ignore the expanded set and draw every node
    pub expand_all: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            depth_colors: DEFAULT_DEPTH_COLORS.to_vec(),
            color: true,
            max_depth: None,
            expand_all: false,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_expand_all(mut self, expand_all: bool) -> Self {
        self.expand_all = expand_all;
        self
    }

    pub fn with_depth_colors(mut self, colors: Vec<Color>) -> Self {
        self.depth_colors = colors;
        self
    }

    fn depth_color(&self, level: usize) -> Option<Color> {
        if self.depth_colors.is_empty() {
            None
        } else {
            Some(self.depth_colors[level % self.depth_colors.len()])
        }
    }
}

/// Expansion and highlight state the renderer reads from
#[derive(Debug, Clone, Copy)]
pub struct RenderState<'a> {
    pub expanded: &'a HashSet<String>,
    pub highlighted: &'a HashSet<String>,
    pub hits: &'a [String],
}

impl<'a> RenderState<'a> {
    pub fn from_session(session: &'a TraceSession) -> Self {
        Self {
            expanded: session.expanded(),
            highlighted: session.highlighted(),
            hits: session.hits(),
        }
    }
}

struct Pending<'a> {
    node: &'a TraceNode,
    /// Guide columns inherited from ancestors; column `i` belongs to level `i + 1`
    guides: Vec<&'static str>,
    level: usize,
    is_last: bool,
}

/// Render the visible part of a forest
///
/// **Public** - main entry point for text output
///
/// # Returns
/// One line per visible node, newline-terminated
pub fn render_tree(forest: &[TraceNode], state: RenderState<'_>, config: &RenderConfig) -> String {
    let hits: HashSet<&str> = state.hits.iter().map(String::as_str).collect();
    let mut out = String::new();

    let mut pending: Vec<Pending<'_>> = forest
        .iter()
        .rev()
        .map(|node| Pending {
            node,
            guides: Vec::new(),
            level: 0,
            is_last: true,
        })
        .collect();

    while let Some(item) = pending.pop() {
        let node = item.node;
        let within_depth = config.max_depth.map_or(true, |max| item.level < max);
        let open = !node.is_leaf()
            && within_depth
            && (config.expand_all || state.expanded.contains(&node.id));

        // Guides
        if item.level > 0 {
            let branch = if item.is_last { "└─ " } else { "├─ " };
            for (column, guide) in item.guides.iter().enumerate() {
                out.push_str(&paint_guide(guide, column + 1, config));
            }
            out.push_str(&paint_guide(branch, item.level, config));
        }

        // Marker
        let marker = if node.is_leaf() {
            " "
        } else if open {
            "-"
        } else {
            "+"
        };
        out.push_str(marker);
        out.push(' ');

        // Content
        let is_hit = hits.contains(node.id.as_str());
        if is_hit {
            out.push_str("* ");
        }
        out.push_str(&paint_content(
            &node.content,
            is_hit,
            state.highlighted.contains(&node.id),
            config,
        ));
        out.push('\n');

        if open {
            let mut child_guides = item.guides.clone();
            if item.level > 0 {
                child_guides.push(if item.is_last { "   " } else { "│  " });
            }
            let count = node.children.len();
            for (index, child) in node.children.iter().enumerate().rev() {
                pending.push(Pending {
                    node: child,
                    guides: child_guides.clone(),
                    level: item.level + 1,
                    is_last: index + 1 == count,
                });
            }
        }
    }

    out
}

/// Render everything a session currently shows
pub fn render_session(session: &TraceSession, config: &RenderConfig) -> String {
    render_tree(session.forest(), RenderState::from_session(session), config)
}

fn paint_guide(text: &str, level: usize, config: &RenderConfig) -> String {
    match config.depth_color(level) {
        Some(color) if config.color && !text.is_empty() => text.color(color).to_string(),
        _ => text.to_string(),
    }
}

fn paint_content(content: &str, is_hit: bool, is_highlighted: bool, config: &RenderConfig) -> String {
    if !config.color {
        return content.to_string();
    }
    if is_hit {
        return content.black().on_yellow().to_string();
    }

    let painted: String = tokenize(content)
        .into_iter()
        .map(|span| {
            let styled = match span.kind {
                SpanKind::Gas => span.text.dimmed(),
                SpanKind::Contract => span.text.cyan().bold(),
                SpanKind::Function => span.text.green(),
                SpanKind::CallType => span.text.magenta(),
                SpanKind::Return => span.text.bright_green(),
                SpanKind::Event => span.text.yellow(),
                SpanKind::Hex => span.text.blue(),
                SpanKind::Plain => span.text.normal(),
            };
            if is_highlighted {
                styled.bold().to_string()
            } else {
                styled.to_string()
            }
        })
        .collect();
    painted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;
    use pretty_assertions::assert_eq;

    const DOC: &str = "Traces:\n\
        [100] Vault::deposit(5)\n\
        ├─ [60] Token::transferFrom(0x1, 0x2, 5) [call]\n\
        │   ├─ emit Transfer(from: 0x1, to: 0x2, value: 5)\n\
        │   └─ ← [Return] true\n\
        └─ ← [Stop]\n";

    #[test]
    fn test_render_expanded_plain() {
        let forest = parse_document(DOC);
        let empty = HashSet::new();
        let state = RenderState {
            expanded: &empty,
            highlighted: &empty,
            hits: &[],
        };
        let config = RenderConfig::new().with_color(false).with_expand_all(true);

        assert_eq!(
            render_tree(&forest, state, &config),
            "- [100] Vault::deposit(5)\n\
             ├─ - [60] Token::transferFrom(0x1, 0x2, 5) [call]\n\
             │  ├─   emit Transfer(from: 0x1, to: 0x2, value: 5)\n\
             │  └─   ← [Return] true\n\
             └─   ← [Stop]\n"
        );
    }

    #[test]
    fn test_render_collapsed_by_default() {
        let forest = parse_document(DOC);
        let empty = HashSet::new();
        let state = RenderState {
            expanded: &empty,
            highlighted: &empty,
            hits: &[],
        };
        let config = RenderConfig::new().with_color(false);

        assert_eq!(render_tree(&forest, state, &config), "+ [100] Vault::deposit(5)\n");
    }

    #[test]
    fn test_render_max_depth() {
        let forest = parse_document(DOC);
        let empty = HashSet::new();
        let state = RenderState {
            expanded: &empty,
            highlighted: &empty,
            hits: &[],
        };
        let config = RenderConfig::new()
            .with_color(false)
            .with_expand_all(true)
            .with_max_depth(Some(1));

        let rendered = render_tree(&forest, state, &config);
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("├─ + [60] Token::transferFrom"));
    }

    #[test]
    fn test_guide_columns_keep_their_level_color() {
        colored::control::set_override(true);
        let forest = parse_document(
            "Traces:\nA::a()\n├─ B::b()\n│  ├─ C::c()\n│  │  └─ D::d()\n│  └─ E::e()\n└─ F::f()\n",
        );
        let empty = HashSet::new();
        let state = RenderState {
            expanded: &empty,
            highlighted: &empty,
            hits: &[],
        };
        let config = RenderConfig::new()
            .with_depth_colors(vec![Color::Red, Color::Green, Color::Blue])
            .with_expand_all(true);

        let rendered = render_tree(&forest, state, &config);
        let lines: Vec<&str> = rendered.lines().collect();
        let level_one = "│  ".color(Color::Green).to_string();

        // C::c() at level 2, D::d() at level 3
        let c_prefix = format!("{}{}", level_one, "├─ ".color(Color::Blue));
        let d_prefix = format!(
            "{}{}{}",
            level_one,
            "│  ".color(Color::Blue),
            "└─ ".color(Color::Red)
        );
        assert!(lines[2].starts_with(&c_prefix), "{:?}", lines[2]);
        assert!(lines[3].starts_with(&d_prefix), "{:?}", lines[3]);
        colored::control::unset_override();
    }
}
