//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! ## Algorithm
//!
//! Each BSP node contains:
//! - A dividing plane
//! - Polygons coplanar with the plane
//! - Front subtree (polygons in front of plane)
//! - Back subtree (polygons behind plane)
//!
//! ## Operations
//!
//! - `clip_to`: Remove polygons from this tree that are inside another tree
//! - `invert`: Flip all polygons/planes and swap front/back subtrees
//! - `all_polygons`: Collect all polygons from the tree
//!
//! ## Ownership
//!
//! A node exclusively owns its polygon list and child subtrees; trees are
//! built fresh for one boolean operation and discarded after flattening.
//!
//! ## Stack Safety
//!
//! All operations use iterative algorithms with explicit work stacks, so
//! deep trees never exhaust the call stack.

use super::plane::Plane;
use super::polygon::Polygon;

/// A node in the BSP tree.
///
/// Each node partitions space using a plane and stores polygons
/// coplanar with that plane.
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    /// Dividing plane, taken from the first polygon inserted at this node
    plane: Option<Plane>,
    /// Polygons coplanar with this node's plane
    polygons: Vec<Polygon>,
    /// Front subtree (polygons in front of plane)
    front: Option<Box<BspNode>>,
    /// Back subtree (polygons behind plane)
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a new BSP tree from polygons.
    ///
    /// # Arguments
    ///
    /// * `polygons` - Polygons to build the tree from
    /// * `tolerance` - Coplanarity band for plane-side classification
    ///
    /// # Returns
    ///
    /// A BSP tree containing all the polygons.
    pub fn new(polygons: Vec<Polygon>, tolerance: f64) -> Self {
        let mut root = Self::default();

        if polygons.is_empty() {
            return root;
        }

        // Build iteratively using a work stack of (node, polygons_to_add).
        // Raw pointers because each node on the stack needs mutable access
        // while its parent is still borrowed by the tree.
        type WorkItem = (*mut BspNode, Vec<Polygon>);
        let mut stack: Vec<WorkItem> = vec![(&mut root as *mut BspNode, polygons)];

        while let Some((node_ptr, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }

            // Safety: we control all pointers and they point to valid nodes
            let node = unsafe { &mut *node_ptr };

            let mut polys = polys;

            // O(1) splitter extraction; node plane comes from the splitter
            let splitter = polys.swap_remove(0);
            let plane = *splitter.plane();
            node.plane = Some(plane);
            node.polygons.push(splitter);

            // Pre-allocate with estimated capacity to reduce reallocations
            let estimated_size = polys.len() / 2 + 1;
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            let mut front_polys = Vec::with_capacity(estimated_size);
            let mut back_polys = Vec::with_capacity(estimated_size);

            for poly in polys {
                poly.split(
                    &plane,
                    tolerance,
                    &mut coplanar_front,
                    &mut coplanar_back,
                    &mut front_polys,
                    &mut back_polys,
                );
            }

            // Coplanar polygons stay at this node regardless of facing
            node.polygons.extend(coplanar_front);
            node.polygons.extend(coplanar_back);

            // Create child nodes and add to stack
            if !front_polys.is_empty() {
                let front = node.front.get_or_insert_with(Default::default);
                stack.push((front.as_mut() as *mut BspNode, front_polys));
            }

            if !back_polys.is_empty() {
                let back = node.back.get_or_insert_with(Default::default);
                stack.push((back.as_mut() as *mut BspNode, back_polys));
            }
        }

        root
    }

    /// Inverts this BSP tree (flips all polygons/planes and swaps subtrees).
    ///
    /// Turns "inside" into "outside"; used to express difference and
    /// intersection through the union-style clip sequence.
    pub fn invert(&mut self) {
        let mut stack: Vec<*mut BspNode> = vec![self as *mut BspNode];

        while let Some(node_ptr) = stack.pop() {
            // Safety: we control all pointers and they point to valid nodes
            let node = unsafe { &mut *node_ptr };

            for poly in &mut node.polygons {
                poly.flip();
            }
            if let Some(plane) = &mut node.plane {
                plane.flip();
            }

            std::mem::swap(&mut node.front, &mut node.back);

            if let Some(ref mut front) = node.front {
                stack.push(front.as_mut() as *mut BspNode);
            }
            if let Some(ref mut back) = node.back {
                stack.push(back.as_mut() as *mut BspNode);
            }
        }
    }

    /// Clips polygons to this BSP tree.
    ///
    /// Removes the parts of the given polygons that lie inside the solid
    /// represented by this tree.
    ///
    /// # Arguments
    ///
    /// * `polygons` - Polygons to clip
    /// * `tolerance` - Coplanarity band for plane-side classification
    ///
    /// # Returns
    ///
    /// The parts of the polygons outside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>, tolerance: f64) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }

            let plane = match node.plane {
                Some(p) => p,
                None => {
                    // Leaf with no plane cannot clip anything
                    result.extend(polys);
                    continue;
                }
            };

            let mut front_polys = Vec::new();
            let mut back_polys = Vec::new();

            for poly in polys {
                // Coplanar polygons follow their facing: same direction as
                // the node plane survives with the front set, opposite goes
                // to the back set
                let mut coplanar_front = Vec::new();
                let mut coplanar_back = Vec::new();
                poly.split(
                    &plane,
                    tolerance,
                    &mut coplanar_front,
                    &mut coplanar_back,
                    &mut front_polys,
                    &mut back_polys,
                );
                front_polys.extend(coplanar_front);
                back_polys.extend(coplanar_back);
            }

            if let Some(ref front) = node.front {
                stack.push((front.as_ref(), front_polys));
            } else {
                result.extend(front_polys);
            }

            if let Some(ref back) = node.back {
                stack.push((back.as_ref(), back_polys));
            }
            // No back subtree: back polygons are inside the solid - discard
        }

        result
    }

    /// Clips this tree's polygons to another tree.
    ///
    /// Removes parts of this tree's polygons that are inside the other
    /// tree's solid.
    pub fn clip_to(&mut self, other: &BspNode, tolerance: f64) {
        let mut stack: Vec<*mut BspNode> = vec![self as *mut BspNode];

        while let Some(node_ptr) = stack.pop() {
            // Safety: we control all pointers and they point to valid nodes
            let node = unsafe { &mut *node_ptr };

            node.polygons = other.clip_polygons(std::mem::take(&mut node.polygons), tolerance);

            if let Some(ref mut front) = node.front {
                stack.push(front.as_mut() as *mut BspNode);
            }
            if let Some(ref mut back) = node.back {
                stack.push(back.as_mut() as *mut BspNode);
            }
        }
    }

    /// Collects all polygons from this tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());

            if let Some(ref front) = node.front {
                stack.push(front.as_ref());
            }
            if let Some(ref back) = node.back {
                stack.push(back.as_ref());
            }
        }

        result
    }

    /// Returns the number of polygons in this tree.
    pub fn polygon_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            count += node.polygons.len();

            if let Some(ref front) = node.front {
                stack.push(front.as_ref());
            }
            if let Some(ref back) = node.back {
                stack.push(back.as_ref());
            }
        }

        count
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        // Iterative drop so deep trees cannot overflow the stack
        let mut stack = Vec::new();

        if let Some(front) = self.front.take() {
            stack.push(front);
        }
        if let Some(back) = self.back.take() {
            stack.push(back);
        }

        while let Some(mut node) = stack.pop() {
            // Move children to the stack before node is dropped; with
            // children detached the implicit drop cannot recurse
            if let Some(front) = node.front.take() {
                stack.push(front);
            }
            if let Some(back) = node.back.take() {
                stack.push(back);
            }
        }
    }
}
