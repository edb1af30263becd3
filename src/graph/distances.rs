use super::*;
use crate::Hops;
use crate::Node;

/// Sentinel for pairs with no path between them.
const UNREACHABLE: Hops = Hops::MAX;

/// All-pairs shortest hop counts over a [`Map`].
///
/// Transport modes and tickets are ignored: this is pure graph distance.
/// Stored as a flat row-major `N × N` matrix where `N = map.size()`.
/// Pairs that are not connected hold a sentinel and read back as `None`,
/// so they can never be mistaken for the zero self-distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances {
    size: usize,
    hops: Vec<Hops>,
}

impl From<&Map> for Distances {
    /// Floyd–Warshall relaxation, `O(N³)`.
    fn from(map: &Map) -> Self {
        let size = map.size();
        let mut hops = vec![UNREACHABLE; size * size];
        for i in 0..size {
            hops[i * size + i] = 0;
        }
        for (a, b) in map.edges().filter(|(a, b)| a != b) {
            hops[a * size + b] = 1;
            hops[b * size + a] = 1;
        }
        for k in 0..size {
            for i in 0..size {
                let ik = hops[i * size + k];
                if ik == UNREACHABLE {
                    continue;
                }
                for j in 0..size {
                    let kj = hops[k * size + j];
                    if kj == UNREACHABLE {
                        continue;
                    }
                    let ij = &mut hops[i * size + j];
                    *ij = (*ij).min(ik + kj);
                }
            }
        }
        Self { size, hops }
    }
}

impl Distances {
    pub fn size(&self) -> usize {
        self.size
    }
    /// Hops from `a` to `b`, or `None` if either is off the table or no path exists.
    pub fn get(&self, a: Node, b: Node) -> Option<Hops> {
        (a < self.size && b < self.size)
            .then(|| self.hops[a * self.size + b])
            .filter(|&h| h != UNREACHABLE)
    }
    /// Hops from `from` to the closest of `targets` that it can reach at all.
    pub fn nearest(&self, from: Node, targets: impl IntoIterator<Item = Node>) -> Option<Hops> {
        targets
            .into_iter()
            .filter_map(|target| self.get(from, target))
            .min()
    }
}
