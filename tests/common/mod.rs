#![allow(dead_code)]

use xzqh_reader::{DataBuilder, Level, RegionNode};

/// Total number of regions in [`sample_tree`].
pub const SAMPLE_REGION_COUNT: usize = 12;

/// Three provinces with "Chaoyang" at two depths and "Jilin" as both a
/// province and one of its own cities.
pub fn sample_tree() -> Vec<RegionNode> {
    vec![
        RegionNode::new("Beijing", "110000")
            .with_level(Level::Province)
            .with_center(116.405285, 39.904989)
            .with_child(
                RegionNode::new("Beijing City", "110100")
                    .with_level(Level::Prefecture)
                    .with_children([
                        RegionNode::new("Dongcheng", "110101")
                            .with_level(Level::County)
                            .with_center(116.418757, 39.917544),
                        RegionNode::new("Chaoyang", "110105")
                            .with_level(Level::County)
                            .with_center(116.4, 39.9),
                    ]),
            ),
        RegionNode::new("Jilin", "220000")
            .with_level(Level::Province)
            .with_center(125.3245, 43.886841)
            .with_children([
                RegionNode::new("Changchun", "220100")
                    .with_level(Level::Prefecture)
                    .with_child(
                        RegionNode::new("Chaoyang", "220104")
                            .with_level(Level::County)
                            .with_center(125.288319, 43.833513),
                    ),
                RegionNode::new("Jilin", "220200")
                    .with_level(Level::Prefecture)
                    .with_child(RegionNode::new("Changyi", "220202").with_level(Level::County)),
            ]),
        RegionNode::new("Liaoning", "210000")
            .with_level(Level::Province)
            .with_child(
                RegionNode::new("Chaoyang", "211300")
                    .with_level(Level::Prefecture)
                    .with_center(120.451176, 41.576758)
                    .with_child(RegionNode::new("Shuangta", "211302").with_level(Level::County)),
            ),
    ]
}

pub fn sample_bytes() -> Vec<u8> {
    DataBuilder::new().build(&sample_tree()).expect("encode sample tree")
}

pub fn encode(roots: &[RegionNode]) -> Vec<u8> {
    DataBuilder::new().build(roots).expect("encode regions")
}
