use std::mem;

use crate::group::Group;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PotentialError {
    #[error("merging {u} and {v} contradicts their recorded potential difference")]
    Inconsistent { u: usize, v: usize },
    #[error("potential difference of {u} and {v} is indefinite; they are not connected")]
    Indefinite { u: usize, v: usize },
}

#[derive(Clone, Copy, Debug)]
struct Link(i32); // Represents parent if >= 0, size if < 0

impl Link {
    fn node(p: u32) -> Self {
        Self(p as i32)
    }

    fn size(s: u32) -> Self {
        Self(-(s as i32))
    }

    fn get(&self) -> Result<u32, u32> {
        if self.0 >= 0 {
            Ok(self.0 as u32)
        } else {
            Err((-self.0) as u32)
        }
    }
}

/// Disjoint set forest where every element carries a potential in an abelian group `E`.
///
/// `links[u].1` is the potential of `u` minus the potential of its current parent;
/// for a root it is always `E::id()`. After `find_root(u)` the parent of `u` is the root.
#[derive(Clone, Debug)]
pub struct DisjointSet<E> {
    links: Vec<(Link, E)>,
    n_groups: usize,
    path: Vec<u32>,
}

impl<E: Group> DisjointSet<E> {
    pub fn new(n: usize) -> Self {
        assert!(
            n <= i32::MAX as usize,
            "DisjointSet supports at most {} elements, got {}",
            i32::MAX,
            n
        );
        Self {
            links: (0..n).map(|_| (Link::size(1), E::id())).collect(),
            n_groups: n,
            path: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.n_groups
    }

    #[track_caller]
    fn check_index(&self, u: usize) {
        assert!(
            u < self.links.len(),
            "index {} out of range for DisjointSet of length {}",
            u,
            self.links.len()
        );
    }

    fn root_size(&self, root: usize) -> u32 {
        match self.links[root].0.get() {
            Ok(_) => unreachable!("{} is not a root", root),
            Err(size) => size,
        }
    }

    /// Returns the root of `u` and `potential(u) - potential(root)`.
    ///
    /// Two passes: climb to the root, then walk the recorded path back down from
    /// the root side, folding each parent's root-relative potential into its child.
    #[track_caller]
    pub fn find_root_with_potential(&mut self, u: usize) -> (usize, E) {
        self.check_index(u);
        let Self { links, path, .. } = self;

        let mut root = u;
        while let Ok(p) = links[root].0.get() {
            path.push(root as u32);
            root = p as usize;
        }

        let mut w_to_root = E::id();
        for &x in path.iter().rev() {
            let (l, w) = &mut links[x as usize];
            w.add_assign(&w_to_root);
            *l = Link::node(root as u32);
            w_to_root = w.clone();
        }
        path.clear();
        (root, w_to_root)
    }

    #[track_caller]
    pub fn find_root(&mut self, u: usize) -> usize {
        self.find_root_with_potential(u).0
    }

    #[track_caller]
    pub fn get_size(&mut self, u: usize) -> usize {
        let root = self.find_root(u);
        self.root_size(root) as usize
    }

    #[track_caller]
    pub fn connected(&mut self, u: usize, v: usize) -> bool {
        self.find_root(u) == self.find_root(v)
    }

    /// Asserts `potential(u) - potential(v) == weight_uv`.
    ///
    /// Returns `Ok(true)` if two sets were previously disjoint, `Ok(false)` if the
    /// assertion is already implied, and `Err(Inconsistent)` if it contradicts the
    /// recorded potentials. A rejected merge changes nothing.
    #[track_caller]
    pub fn merge(&mut self, u: usize, v: usize, mut weight_uv: E) -> Result<bool, PotentialError> {
        let (mut ru, mut wu) = self.find_root_with_potential(u);
        let (mut rv, mut wv) = self.find_root_with_potential(v);
        if ru == rv {
            let mut wu_expected = weight_uv;
            wu_expected.add_assign(&wv);
            if wu == wu_expected {
                return Ok(false);
            }
            tracing::debug!(u, v, "rejected merge with conflicting potential");
            return Err(PotentialError::Inconsistent { u, v });
        }

        let mut size_u = self.root_size(ru);
        let mut size_v = self.root_size(rv);
        if size_u < size_v {
            mem::swap(&mut ru, &mut rv);
            mem::swap(&mut wu, &mut wv);
            mem::swap(&mut size_u, &mut size_v);
            weight_uv = weight_uv.neg();
        }

        // potential(rv) - potential(ru) = wu - wv - weight_uv
        wu.sub_assign(&wv);
        wu.sub_assign(&weight_uv);
        self.links[rv] = (Link::node(ru as u32), wu);
        self.links[ru].0 = Link::size(size_u + size_v);
        self.n_groups -= 1;

        tracing::trace!(root = ru, absorbed = rv, size = size_u + size_v, "merged groups");
        Ok(true)
    }

    /// `potential(u) - potential(v)`, defined only if `u` and `v` are connected.
    #[track_caller]
    pub fn delta_potential(&mut self, u: usize, v: usize) -> Result<E, PotentialError> {
        let (ru, mut wu) = self.find_root_with_potential(u);
        let (rv, wv) = self.find_root_with_potential(v);
        if ru != rv {
            return Err(PotentialError::Indefinite { u, v });
        }
        wu.sub_assign(&wv);
        Ok(wu)
    }

    // Groups ordered by their smallest element, each sorted ascending
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let n = self.len();
        let mut index = vec![usize::MAX; n];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.n_groups);
        for u in 0..n {
            let root = self.find_root(u);
            if index[root] == usize::MAX {
                index[root] = groups.len();
                groups.push(vec![]);
            }
            groups[index[root]].push(u);
        }
        groups
    }
}
