use std::collections::HashMap;

use crate::errors::Error;

// The matrix is the circular 4-way linked structure from Knuth's
// "Dancing Links" paper. Every constraint is a column with a header node,
// every candidate is a row of nodes, and a node exists wherever a row has
// a 1 in a column. Covering a column splices it out of the header ring and
// unlinks every row that touches it from all other columns; uncovering
// undoes this in exact reverse order, which is what makes cheap
// backtracking possible.
//
// Nodes never move or get freed once created. Instead of pointers they
// hold indices into a single arena vector, so cover/uncover are pure
// index rewiring and the whole matrix is freed in one piece.

/// Index of the root header in the node arena.
///
/// Walking `right` from the root visits exactly the uncovered columns,
/// in creation order.
const ROOT: usize = 0;

struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    /// Arena index of the column header this node belongs to.
    /// Headers (and the root) point at themselves.
    column: usize,
    kind: NodeKind,
}

enum NodeKind {
    /// A column header carrying the column metadata.
    Header(Header),
    /// An entry of a candidate row, pointing into the payload table.
    Cell { row: usize },
}

struct Header {
    name: String,
    /// Number of nodes currently linked into this column.
    size: usize,
    /// Primary columns must be covered exactly once; secondary columns
    /// are only conflict-avoided and never force a branch.
    primary: bool,
}

/// A sparse exact cover matrix with dancing links.
///
/// `T` is an opaque payload attached to every candidate row; solutions
/// are reported as lists of payload clones.
///
/// ## Example
///
/// The toy problem from Knuth's paper: columns a–g are covered exactly
/// once only by the rows {a, d}, {b, g} and {c, e, f}.
///
/// ```
/// use queens::Matrix;
///
/// let names = ["a", "b", "c", "d", "e", "f", "g"];
/// let mut matrix = Matrix::new(names.iter().map(|&n| (n, true))).unwrap();
/// matrix.add_row(&["c", "e", "f"], 0).unwrap();
/// matrix.add_row(&["a", "d", "g"], 1).unwrap();
/// matrix.add_row(&["b", "c", "f"], 2).unwrap();
/// matrix.add_row(&["a", "d"], 3).unwrap();
/// matrix.add_row(&["b", "g"], 4).unwrap();
/// matrix.add_row(&["d", "e", "g"], 5).unwrap();
///
/// assert_eq!(matrix.search(), vec![vec![3, 0, 4]]);
/// ```
pub struct Matrix<T> {
    nodes: Vec<Node>,
    /// Column name to header index. Lookup only; all iteration goes
    /// through the header ring so the map order never matters.
    columns: HashMap<String, usize>,
    /// Payload of each inserted row, indexed by insertion order.
    payloads: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Creates a matrix with the given `(name, is_primary)` columns.
    ///
    /// Creation order is significant: it fixes the header ring order,
    /// which is the tie-break order for column selection during search
    /// and thereby the order solutions are found in.
    pub fn new<I, S>(columns: I) -> Result<Matrix<T>, Error>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut matrix = Matrix {
            nodes: vec![Node {
                left: ROOT,
                right: ROOT,
                up: ROOT,
                down: ROOT,
                column: ROOT,
                kind: NodeKind::Header(Header {
                    name: String::new(),
                    size: 0,
                    primary: false,
                }),
            }],
            columns: HashMap::new(),
            payloads: Vec::new(),
        };
        for (name, primary) in columns {
            matrix.push_column(name.into(), primary)?;
        }
        Ok(matrix)
    }

    fn push_column(&mut self, name: String, primary: bool) -> Result<(), Error> {
        if self.columns.contains_key(&name) {
            return Err(Error::DuplicateColumn(name));
        }
        let ix = self.nodes.len();
        let last = self.nodes[ROOT].left;
        self.nodes.push(Node {
            left: last,
            right: ROOT,
            up: ix,
            down: ix,
            column: ix,
            kind: NodeKind::Header(Header {
                name: name.clone(),
                size: 0,
                primary,
            }),
        });
        self.nodes[last].right = ix;
        self.nodes[ROOT].left = ix;
        self.columns.insert(name, ix);
        Ok(())
    }

    /// Inserts a candidate row with a 1 in each of the named columns.
    ///
    /// The nodes go to the bottom of each column ring, so a column lists
    /// its rows in insertion order; the row ring keeps the order the
    /// names were given in.
    pub fn add_row<I, S>(&mut self, column_names: I, payload: T) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Resolve every name before touching any link, so a failed
        // lookup leaves the matrix unchanged.
        let mut headers = Vec::new();
        for name in column_names {
            let name = name.as_ref();
            let &ix = self
                .columns
                .get(name)
                .ok_or_else(|| Error::UnknownColumn(name.to_owned()))?;
            headers.push(ix);
        }

        let row = self.payloads.len();
        self.payloads.push(payload);
        let mut first = None;
        for col in headers {
            let ix = self.nodes.len();
            let up = self.nodes[col].up;
            // Directly above the header, i.e. at the bottom of the column.
            self.nodes.push(Node {
                left: ix,
                right: ix,
                up,
                down: col,
                column: col,
                kind: NodeKind::Cell { row },
            });
            self.nodes[up].down = ix;
            self.nodes[col].up = ix;
            self.header_mut(col).size += 1;

            match first {
                // The first node of a row self-links.
                None => first = Some(ix),
                // Later nodes go to the left of the first, i.e. to the
                // end of the row ring.
                Some(first) => {
                    let last = self.nodes[first].left;
                    self.nodes[ix].left = last;
                    self.nodes[ix].right = first;
                    self.nodes[last].right = ix;
                    self.nodes[first].left = ix;
                }
            }
        }
        Ok(())
    }

    /// Live node count of the named column, if it is registered.
    pub fn column_size(&self, name: &str) -> Option<usize> {
        self.columns.get(name).map(|&ix| self.header(ix).size)
    }

    /// Finds all solutions.
    ///
    /// Each solution is the list of chosen row payloads, in the order
    /// the search selected them. Runs on identically built matrices
    /// return identical lists.
    pub fn search(&mut self) -> Vec<Vec<T>> {
        self.search_at_most(usize::MAX)
    }

    /// Finds the first `limit` solutions the search encounters.
    /// If fewer exist, returns only those.
    pub fn search_at_most(&mut self, limit: usize) -> Vec<Vec<T>> {
        let mut results = Vec::new();
        let mut partial = Vec::new();
        self.search_rec(limit, &mut partial, &mut results);
        results
    }

    fn search_rec(&mut self, limit: usize, partial: &mut Vec<usize>, results: &mut Vec<Vec<T>>) {
        if results.len() == limit {
            return;
        }

        // Pick the uncovered primary column with the fewest live nodes;
        // the first one in ring order wins ties. No primary column left
        // means the partial cover is a complete solution.
        let mut chosen: Option<usize> = None;
        let mut ix = self.nodes[ROOT].right;
        while ix != ROOT {
            let header = self.header(ix);
            if header.primary {
                match chosen {
                    Some(col) if self.header(col).size <= header.size => {}
                    _ => chosen = Some(ix),
                }
            }
            ix = self.nodes[ix].right;
        }
        let col = match chosen {
            Some(col) => col,
            None => {
                let solution = partial.iter().map(|&row| self.payloads[row].clone()).collect();
                results.push(solution);
                return;
            }
        };
        if self.header(col).size == 0 {
            // No live row can satisfy this constraint anymore.
            return;
        }

        self.cover(col);
        let mut r = self.nodes[col].down;
        while r != col {
            partial.push(self.row_of(r));
            let mut j = self.nodes[r].right;
            while j != r {
                let c = self.nodes[j].column;
                self.cover(c);
                j = self.nodes[j].right;
            }

            self.search_rec(limit, partial, results);

            partial.pop();
            let mut j = self.nodes[r].left;
            while j != r {
                let c = self.nodes[j].column;
                self.uncover(c);
                j = self.nodes[j].left;
            }
            r = self.nodes[r].down;
        }
        self.uncover(col);
    }

    /// Covers a column: splices its header out of the header ring and
    /// unlinks every row with a node in this column from all the other
    /// columns that row touches.
    fn cover(&mut self, col: usize) {
        let (left, right) = (self.nodes[col].left, self.nodes[col].right);
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        let mut i = self.nodes[col].down;
        while i != col {
            let mut j = self.nodes[i].right;
            while j != i {
                let (up, down) = (self.nodes[j].up, self.nodes[j].down);
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                let c = self.nodes[j].column;
                self.header_mut(c).size -= 1;
                j = self.nodes[j].right;
            }
            i = self.nodes[i].down;
        }
    }

    /// Uncovers a column, restoring exactly the state before the
    /// matching `cover`. Walks bottom to top and right to left so that
    /// relinks happen in the reverse order of the unlinks.
    fn uncover(&mut self, col: usize) {
        let mut i = self.nodes[col].up;
        while i != col {
            let mut j = self.nodes[i].left;
            while j != i {
                let c = self.nodes[j].column;
                self.header_mut(c).size += 1;
                let (up, down) = (self.nodes[j].up, self.nodes[j].down);
                self.nodes[up].down = j;
                self.nodes[down].up = j;
                j = self.nodes[j].left;
            }
            i = self.nodes[i].up;
        }

        let (left, right) = (self.nodes[col].left, self.nodes[col].right);
        self.nodes[left].right = col;
        self.nodes[right].left = col;
    }

    // may fail, but only if used on a non-header index
    fn header(&self, ix: usize) -> &Header {
        match &self.nodes[ix].kind {
            NodeKind::Header(header) => header,
            NodeKind::Cell { .. } => panic!("node {} is not a column header", ix),
        }
    }

    fn header_mut(&mut self, ix: usize) -> &mut Header {
        match &mut self.nodes[ix].kind {
            NodeKind::Header(header) => header,
            NodeKind::Cell { .. } => panic!("node {} is not a column header", ix),
        }
    }

    fn row_of(&self, ix: usize) -> usize {
        match self.nodes[ix].kind {
            NodeKind::Cell { row } => row,
            NodeKind::Header(_) => panic!("node {} is not a row entry", ix),
        }
    }
}
