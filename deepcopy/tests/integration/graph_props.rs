//! Property tests over random value graphs, with aliasing and cycles.

use std::collections::HashSet;

use bolero::check;
use deepcopy::{Map, Ptr, Struct, Value, anything};

/// Decodes bytes into a value graph. Pointer nodes may reuse any cell created
/// so far, including the ones still being filled in, which yields both shared
/// cells and cycles.
struct GraphBuilder<'a> {
    bytes: core::slice::Iter<'a, u8>,
    cells: Vec<Ptr>,
}

impl GraphBuilder<'_> {
    fn byte(&mut self) -> u8 {
        self.bytes.next().copied().unwrap_or(0)
    }

    fn value(&mut self, depth: usize) -> Value {
        let tag = self.byte();
        if depth >= 5 || self.bytes.len() == 0 {
            return Value::from(tag);
        }
        match tag % 10 {
            0 => Value::Nil,
            1 => Value::I64(i64::from(self.byte()) - 128),
            2 => Value::from(format!("s{}", self.byte())),
            3 => {
                let n = self.byte() % 4;
                (0..n).map(|_| self.value(depth + 1)).collect()
            }
            4 => {
                let items = [self.value(depth + 1), self.value(depth + 1)];
                Value::from(items)
            }
            5 => {
                let n = self.byte() % 4;
                let mut map = Map::new();
                for _ in 0..n {
                    let key = self.byte();
                    let value = self.value(depth + 1);
                    map.insert(key, value);
                }
                Value::from(map)
            }
            6 => {
                let cell = Ptr::new(Value::Nil);
                self.cells.push(cell.clone());
                let target = self.value(depth + 1);
                cell.set(target);
                Value::from(cell)
            }
            7 => match self.cells.len() {
                0 => Value::nil_pointer(),
                len => {
                    let index = usize::from(self.byte()) % len;
                    Value::from(self.cells[index].clone())
                }
            },
            8 => Value::boxed(self.value(depth + 1)),
            _ => {
                let a = self.value(depth + 1);
                let b = self.value(depth + 1);
                Value::from(Struct::new("Node").with_field("a", a).with_field("b", b))
            }
        }
    }
}

fn build(bytes: &[u8]) -> Value {
    let mut builder = GraphBuilder {
        bytes: bytes.iter(),
        cells: Vec::new(),
    };
    builder.value(0)
}

/// Addresses of every cell reachable from `value`.
fn cells(value: &Value, seen: &mut HashSet<*const ()>) {
    match value {
        Value::Pointer(Some(p)) => {
            if seen.insert(p.as_ptr()) {
                cells(&p.borrow(), seen);
            }
        }
        Value::Array(items) => items.iter().for_each(|v| cells(v, seen)),
        Value::Slice(items) => items.iter().for_each(|v| cells(v, seen)),
        Value::Map(map) => map.iter().for_each(|(_, v)| cells(v, seen)),
        Value::Struct(s) => s.fields().iter().for_each(|f| cells(f.value(), seen)),
        Value::Interface(Some(inner)) => cells(inner, seen),
        _ => {}
    }
}

#[test]
fn copies_are_equal_and_share_no_cells() {
    check!().with_type::<Vec<u8>>().for_each(|bytes: &Vec<u8>| {
        let original = build(bytes);
        let copy = anything(&original).expect("generated graphs are copyable");
        assert_eq!(copy, original);

        let mut original_cells = HashSet::new();
        cells(&original, &mut original_cells);
        let mut copy_cells = HashSet::new();
        cells(&copy, &mut copy_cells);

        // one cell in the copy per distinct cell in the source
        assert_eq!(copy_cells.len(), original_cells.len());
        assert!(copy_cells.is_disjoint(&original_cells));
    });
}

#[test]
fn builder_produces_cycles() {
    // pointer, then struct, whose fields reuse cell 0 twice
    let graph = build(&[6, 9, 7, 0, 7, 0, 0]);
    let mut seen = HashSet::new();
    cells(&graph, &mut seen);
    assert_eq!(seen.len(), 1);

    let copy = anything(&graph).unwrap();
    let cell = copy.as_pointer().unwrap();
    let target = cell.borrow();
    let node = target.as_struct().unwrap();
    assert!(node.field("a").unwrap().as_pointer().unwrap().ptr_eq(cell));
    assert!(node.field("b").unwrap().as_pointer().unwrap().ptr_eq(cell));
}
