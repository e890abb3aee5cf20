use alphabet_huffman::huffman::{CodeTable, HuffmanTree};
use alphabet_huffman::priority_queue::PriorityQueue;
use alphabet_huffman::Error;

fn main() -> Result<(), Error> {
    let mut slots = [22, 1, 80, 60, 2, 6, 0].map(Some);
    let mut queue = PriorityQueue::from_slots(&mut slots);
    let copy = queue.clone();
    print!("priority queue order:");
    while let Some(value) = queue.delete_min() {
        print!(" {}", value);
    }
    println!();
    println!("copy still holds {} values\n", copy.len());

    let ab = HuffmanTree::merge(HuffmanTree::leaf('a', 2), HuffmanTree::leaf('b', 3))?;
    let abx = HuffmanTree::merge(ab, HuffmanTree::leaf('x', 2))?;
    let tree = HuffmanTree::merge(abx.clone(), HuffmanTree::leaf('y', 8))?;
    println!("huffman tree\n{}", tree);

    let mut code_table = CodeTable::default();
    tree.encode(&mut code_table)?;
    for (symbol, code) in code_table.iter().filter(|(_, code)| !code.is_empty()) {
        println!("{}: {}", symbol, code);
    }

    let code = ['a', 'x', 'y', 'b']
        .iter()
        .filter_map(|&symbol| code_table.get(symbol))
        .collect::<String>();
    println!("encoded axyb\n{}", code);
    println!("decoded\n{}", tree.decode(&code)?);
    Ok(())
}
