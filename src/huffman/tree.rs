use std::cmp::{Ordering, PartialEq, PartialOrd};
use std::fmt;

use super::CodeTable;
use crate::error::Error;

#[derive(Clone, Copy, Debug)]
enum NodeKind {
    Leaf,
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
struct Node {
    item: char,
    count: usize,
    kind: NodeKind,
}

impl Node {
    fn shifted(self, offset: usize) -> Node {
        match self.kind {
            NodeKind::Leaf => self,
            NodeKind::Inner { left, right } => Node {
                kind: NodeKind::Inner {
                    left: left + offset,
                    right: right + offset,
                },
                ..self
            },
        }
    }
}

/// Huffman code tree stored as a node arena.
///
/// Children always precede their parent in `nodes`, so the root is the last node.
/// An empty arena is the empty tree.
#[derive(Clone, Debug, Default)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
}

impl HuffmanTree {
    pub fn leaf(symbol: char, count: usize) -> HuffmanTree {
        HuffmanTree {
            nodes: vec![Node {
                item: symbol,
                count,
                kind: NodeKind::Leaf,
            }],
        }
    }

    /// Combines two trees under a new root. The lesser tree becomes the left child.
    pub fn merge(first: HuffmanTree, second: HuffmanTree) -> crate::Result<HuffmanTree> {
        let (left, right) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        let (left_root, right_root) = match (left.root(), right.root()) {
            (Some(&left_root), Some(&right_root)) => (left_root, right_root),
            _ => return Err(Error::MergeWithEmptyTree),
        };
        let count = left_root
            .count
            .checked_add(right_root.count)
            .ok_or(Error::WeightOverflow)?;

        let offset = left.nodes.len();
        let mut nodes = left.nodes;
        nodes.reserve(right.nodes.len() + 1);
        nodes.extend(right.nodes.into_iter().map(|node| node.shifted(offset)));
        let right_index = nodes.len() - 1;
        nodes.push(Node {
            item: left_root.item.min(right_root.item),
            count,
            kind: NodeKind::Inner {
                left: offset - 1,
                right: right_index,
            },
        });
        Ok(HuffmanTree { nodes })
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Weight of the root, the sum of all leaf counts.
    pub fn count(&self) -> Option<usize> {
        self.root().map(|root| root.count)
    }

    /// Representative symbol of the root, the smallest symbol in the tree.
    pub fn item(&self) -> Option<char> {
        self.root().map(|root| root.item)
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::Leaf))
            .count()
    }

    /// Writes the path to every leaf into `code_table`, '0' for left and '1' for right.
    pub fn encode(&self, code_table: &mut CodeTable) -> crate::Result<()> {
        let root_index = self.root_index().ok_or(Error::EmptyTree)?;
        self.collect_codes(root_index, String::new(), code_table);
        Ok(())
    }

    fn collect_codes(&self, index: usize, path: String, code_table: &mut CodeTable) {
        let node = self.nodes[index];
        match node.kind {
            NodeKind::Leaf => {
                if !code_table.set(node.item, path) {
                    log::warn!("Leaf symbol '{}' has no slot in the code table", node.item);
                }
            }
            NodeKind::Inner { left, right } => {
                self.collect_codes(left, format!("{}0", path), code_table);
                self.collect_codes(right, path + "1", code_table);
            }
        }
    }

    /// Decodes `bits`, failing if they end in the middle of a code word.
    pub fn decode(&self, bits: &str) -> crate::Result<String> {
        self.walk(bits, true)
    }

    /// Decodes `bits`, dropping a trailing incomplete code word.
    pub fn decode_lossy(&self, bits: &str) -> crate::Result<String> {
        self.walk(bits, false)
    }

    fn walk(&self, bits: &str, reject_unterminated: bool) -> crate::Result<String> {
        let root_index = self.root_index().ok_or(Error::EmptyTree)?;
        let mut text = String::new();
        let mut current_index = root_index;
        let mut code_start = 0;
        for (position, bit) in bits.chars().enumerate() {
            let NodeKind::Inner { left, right } = self.nodes[current_index].kind else {
                return Err(Error::SingleLeafTree);
            };
            current_index = match bit {
                '0' => left,
                '1' => right,
                _ => return Err(Error::InvalidBit(bit, position)),
            };
            let node = self.nodes[current_index];
            if let NodeKind::Leaf = node.kind {
                text.push(node.item);
                current_index = root_index;
                code_start = position + 1;
            }
        }
        if current_index != root_index {
            if reject_unterminated {
                return Err(Error::UnterminatedCode(code_start));
            }
            log::debug!("Dropped incomplete code word starting at {}", code_start);
        }
        Ok(text)
    }

    fn root_index(&self) -> Option<usize> {
        self.nodes.len().checked_sub(1)
    }

    fn root(&self) -> Option<&Node> {
        self.nodes.last()
    }
}

impl PartialEq for HuffmanTree {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

/// Trees are ordered by root count, ties broken by root item.
/// An empty tree is not comparable to anything.
impl PartialOrd for HuffmanTree {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let own_root = self.root()?;
        let other_root = other.root()?;
        Some(
            own_root
                .count
                .cmp(&other_root.count)
                .then(own_root.item.cmp(&other_root.item)),
        )
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

fn first_visible_column(line: &str) -> usize {
    line.chars().position(|c| c != ' ').unwrap_or(0)
}

// Tree visualization
impl Node {
    fn get_string(&self, tree: &HuffmanTree) -> Vec<String> {
        match self.kind {
            NodeKind::Leaf => vec![format!("({}:{})", self.item, self.count)],
            NodeKind::Inner { left, right } => {
                let left_box = tree.nodes[left].get_string(tree);
                let right_box = tree.nodes[right].get_string(tree);
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = (first_visible_column(&left_box[0]) * 2
                    + left_box[0].trim().chars().count())
                    / 2;
                let right_pos = (first_visible_column(&right_box[0]) * 2
                    + right_box[0].trim().chars().count())
                    / 2;
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                for i in 0..left_box.len().max(right_box.len()) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root() else {
            return writeln!(f, "(empty)");
        };
        for line in root.get_string(self) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
