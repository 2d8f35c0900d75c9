use crate::*;

/// A named, zero-initialized tensor of fixed shape, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    name: &'static str,
    shape: Vec<usize>,
    data: Vec<Feature>,
}

impl Block {
    pub fn zeros(name: &'static str, shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            name,
            shape,
            data: vec![0.; size],
        }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
    pub fn data(&self) -> &[Feature] {
        &self.data
    }
    fn offset(&self, index: &[usize]) -> usize {
        assert_eq!(index.len(), self.shape.len(), "rank mismatch in {}", self.name);
        index
            .iter()
            .zip(&self.shape)
            .fold(0, |offset, (&i, &dim)| {
                assert!(i < dim, "index {:?} out of bounds {:?} in {}", index, self.shape, self.name);
                offset * dim + i
            })
    }
    pub fn at(&self, index: &[usize]) -> Feature {
        self.data[self.offset(index)]
    }
    pub fn set(&mut self, index: &[usize], value: Feature) {
        let offset = self.offset(index);
        self.data[offset] = value;
    }
}

/// Tensor view of a state: blocks in the order they were written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    blocks: Vec<Block>,
}

impl Observation {
    /// Appends a zeroed block and returns it for writing.
    pub fn alloc(&mut self, name: &'static str, shape: Vec<usize>) -> &mut Block {
        assert!(self.get(name).is_none(), "block {} written twice", name);
        self.blocks.push(Block::zeros(name, shape));
        self.blocks.last_mut().expect("just pushed")
    }
    pub fn get(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.name == name)
    }
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
    /// Total number of entries across blocks.
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|b| b.data.len()).sum()
    }
    /// Blocks concatenated in write order.
    pub fn flatten(&self) -> Vec<Feature> {
        self.blocks
            .iter()
            .flat_map(|b| b.data.iter().copied())
            .collect()
    }
}
