//! Disjoint sets over `0..n` with path halving and union by rank.

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    /// Dense component label per element, filled by `renumber`.
    component: Vec<usize>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            component: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    pub fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }

    /// Assign labels `0..k` to the sets in order of each set's lowest
    /// element. Returns `k`.
    pub fn renumber(&mut self) -> usize {
        let n = self.parent.len();
        let mut label_of_root = vec![usize::MAX; n];
        let mut component = Vec::with_capacity(n);
        let mut count = 0;
        for i in 0..n {
            let root = self.find(i);
            if label_of_root[root] == usize::MAX {
                label_of_root[root] = count;
                count += 1;
            }
            component.push(label_of_root[root]);
        }
        self.component = component;
        count
    }

    /// Label of element `i` as of the last `renumber`.
    ///
    /// # Panics
    ///
    /// If `renumber` has not been called.
    pub fn component(&self, i: usize) -> usize {
        self.component[i]
    }
}
