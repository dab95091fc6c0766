use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use super::model::{DecisionTree, MODEL_VERSION, Node, RandomForestModel};

/// How many features each split considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaxFeatures {
    /// `floor(sqrt(n_features))`, at least 1.
    #[default]
    Sqrt,
    /// `floor(log2(n_features))`, at least 1.
    Log2,
    /// Every feature.
    All,
}

impl MaxFeatures {
    pub fn resolve(self, n_features: usize) -> usize {
        let n = n_features as f64;
        let k = match self {
            MaxFeatures::Sqrt => n.sqrt().floor() as usize,
            MaxFeatures::Log2 => n.log2().floor() as usize,
            MaxFeatures::All => n_features,
        };
        k.clamp(1, n_features.max(1))
    }
}

/// Training hyperparameters for the forest.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    /// Number of trees.
    pub trees: usize,
    /// Seed for bootstrap draws and feature sampling.
    pub seed: u64,
    /// Maximum tree depth; `None` grows until leaves are pure.
    pub max_depth: Option<usize>,
    /// Minimum samples a node needs before it may split.
    pub min_samples_split: usize,
    /// Minimum samples on each side of a split.
    pub min_samples_leaf: usize,
    pub max_features: MaxFeatures,
    /// Draw a bootstrap sample per tree instead of using every row.
    pub bootstrap: bool,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            trees: 100,
            seed: 42,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: MaxFeatures::Sqrt,
            bootstrap: true,
        }
    }
}

/// In-memory dataset used for training and evaluation.
#[derive(Debug, Clone)]
pub struct TrainDataset {
    /// Number of `f32` values in each feature vector.
    pub feature_len: usize,
    /// Ordered list of class identifiers.
    pub classes: Vec<String>,
    /// Feature matrix, row-major.
    pub x: Vec<Vec<f32>>,
    /// Class indices aligned with `x`.
    pub y: Vec<usize>,
}

/// Grow a random forest with Gini splits over bootstrap samples.
///
/// The same dataset and options always produce the same model.
pub fn train_random_forest(
    dataset: &TrainDataset,
    options: &TrainOptions,
) -> Result<RandomForestModel, String> {
    if dataset.x.len() != dataset.y.len() {
        return Err("Mismatched X/Y lengths".to_string());
    }
    if dataset.x.is_empty() {
        return Err("Empty dataset".to_string());
    }
    if dataset.feature_len == 0 {
        return Err("Dataset has no features".to_string());
    }
    if let Some(row) = dataset.x.iter().position(|row| row.len() != dataset.feature_len) {
        return Err(format!(
            "Row {row} has {} features but expected {}",
            dataset.x[row].len(),
            dataset.feature_len
        ));
    }
    let n_classes = dataset.classes.len();
    if n_classes < 2 {
        return Err("Need at least 2 classes".to_string());
    }
    if let Some(&label) = dataset.y.iter().find(|&&label| label >= n_classes) {
        return Err(format!("Label {label} is outside the class list"));
    }
    if options.trees == 0 {
        return Err("Need at least 1 tree".to_string());
    }

    let n = dataset.x.len();
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut trees = Vec::with_capacity(options.trees);
    let mut importances = vec![0.0f64; dataset.feature_len];

    for _ in 0..options.trees {
        let tree_seed: u64 = rng.random();
        let mut tree_rng = StdRng::seed_from_u64(tree_seed);
        let samples: Vec<usize> = if options.bootstrap {
            (0..n).map(|_| tree_rng.random_range(0..n)).collect()
        } else {
            (0..n).collect()
        };
        let mut builder = TreeBuilder::new(dataset, options);
        builder.grow(samples, 0, &mut tree_rng);

        let total: f64 = builder.importances.iter().sum();
        if total > 0.0 {
            for (acc, v) in importances.iter_mut().zip(&builder.importances) {
                *acc += v / total;
            }
        }
        trees.push(DecisionTree {
            nodes: builder.nodes,
        });
    }

    let total: f64 = importances.iter().sum();
    let feature_importances = importances
        .iter()
        .map(|&v| if total > 0.0 { (v / total) as f32 } else { 0.0 })
        .collect();

    Ok(RandomForestModel {
        model_version: MODEL_VERSION,
        n_features: dataset.feature_len,
        classes: dataset.classes.clone(),
        seed: options.seed,
        training_accuracy: None,
        feature_importances,
        trees,
    })
}

struct TreeBuilder<'a> {
    x: &'a [Vec<f32>],
    y: &'a [usize],
    n_classes: usize,
    options: &'a TrainOptions,
    max_features: usize,
    nodes: Vec<Node>,
    importances: Vec<f64>,
}

#[derive(Debug, Clone, Copy)]
struct Split {
    feature: usize,
    threshold: f32,
    /// Weighted child impurity `n_l * gini_l + n_r * gini_r`.
    score: f64,
}

impl<'a> TreeBuilder<'a> {
    fn new(dataset: &'a TrainDataset, options: &'a TrainOptions) -> Self {
        Self {
            x: &dataset.x,
            y: &dataset.y,
            n_classes: dataset.classes.len(),
            options,
            max_features: options.max_features.resolve(dataset.feature_len),
            nodes: Vec::new(),
            importances: vec![0.0; dataset.feature_len],
        }
    }

    fn grow(&mut self, samples: Vec<usize>, depth: usize, rng: &mut StdRng) -> u32 {
        let node_id = self.nodes.len() as u32;
        let counts = self.class_counts(&samples);
        let n = samples.len();
        let pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
        let depth_reached = self.options.max_depth.is_some_and(|max| depth >= max);
        let min_split = self.options.min_samples_split.max(2);

        if !pure && !depth_reached && n >= min_split {
            if let Some(split) = self.best_split(&samples, rng) {
                self.nodes.push(Node::Leaf {
                    distribution: Vec::new(),
                });
                let (left, right): (Vec<usize>, Vec<usize>) = samples
                    .into_iter()
                    .partition(|&i| self.x[i][split.feature] <= split.threshold);
                let parent = weighted_gini(&counts, n);
                self.importances[split.feature] += parent - split.score;

                let left_id = self.grow(left, depth + 1, rng);
                let right_id = self.grow(right, depth + 1, rng);
                self.nodes[node_id as usize] = Node::Split {
                    feature: split.feature as u32,
                    threshold: split.threshold,
                    left: left_id,
                    right: right_id,
                };
                return node_id;
            }
        }

        let total = n.max(1) as f32;
        self.nodes.push(Node::Leaf {
            distribution: counts.iter().map(|&c| c as f32 / total).collect(),
        });
        node_id
    }

    fn class_counts(&self, samples: &[usize]) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_classes];
        for &i in samples {
            counts[self.y[i]] += 1;
        }
        counts
    }

    /// Search a random feature subset; keep drawing past `max_features` until
    /// at least one valid split exists or every feature was tried.
    fn best_split(&self, samples: &[usize], rng: &mut StdRng) -> Option<Split> {
        let mut features: Vec<usize> = (0..self.importances.len()).collect();
        features.shuffle(rng);

        let mut best: Option<Split> = None;
        for (visited, &feature) in features.iter().enumerate() {
            if visited >= self.max_features && best.is_some() {
                break;
            }
            if let Some(split) = self.best_split_for_feature(samples, feature) {
                if best.is_none_or(|b| split.score < b.score) {
                    best = Some(split);
                }
            }
        }
        best
    }

    fn best_split_for_feature(&self, samples: &[usize], feature: usize) -> Option<Split> {
        let mut sorted: Vec<(f32, usize)> = samples
            .iter()
            .map(|&i| (self.x[i][feature], self.y[i]))
            .collect();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let n = sorted.len();
        let min_leaf = self.options.min_samples_leaf.max(1);
        let mut right = vec![0usize; self.n_classes];
        for &(_, label) in &sorted {
            right[label] += 1;
        }
        let mut left = vec![0usize; self.n_classes];

        let mut best: Option<Split> = None;
        for pos in 0..n.saturating_sub(1) {
            let (value, label) = sorted[pos];
            left[label] += 1;
            right[label] -= 1;
            let next = sorted[pos + 1].0;
            if value >= next {
                continue;
            }
            let n_left = pos + 1;
            let n_right = n - n_left;
            if n_left < min_leaf || n_right < min_leaf {
                continue;
            }
            let score = weighted_gini(&left, n_left) + weighted_gini(&right, n_right);
            if best.is_none_or(|b| score < b.score) {
                best = Some(Split {
                    feature,
                    threshold: midpoint(value, next),
                    score,
                });
            }
        }
        best
    }
}

/// `n * gini(counts)`, i.e. `n - sum(c^2) / n`.
fn weighted_gini(counts: &[usize], n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    let sum_sq: f64 = counts.iter().map(|&c| (c as f64) * (c as f64)).sum();
    n - sum_sq / n
}

fn midpoint(lo: f32, hi: f32) -> f32 {
    let mid = lo + (hi - lo) / 2.0;
    // Rounding can push the midpoint onto `hi`, which would send it left.
    if mid >= hi { lo } else { mid }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> Vec<String> {
        vec!["Bad".into(), "Good".into()]
    }

    /// Good when feature 0 exceeds 5; feature 1 is noise.
    fn threshold_dataset() -> TrainDataset {
        let mut x = Vec::new();
        let mut y = Vec::new();
        for i in 0..40 {
            let v = (i % 10) as f32;
            x.push(vec![v, ((i * 7) % 3) as f32]);
            y.push(usize::from(v > 5.0));
        }
        TrainDataset {
            feature_len: 2,
            classes: classes(),
            x,
            y,
        }
    }

    #[test]
    fn max_features_resolution() {
        assert_eq!(MaxFeatures::Sqrt.resolve(61), 7);
        assert_eq!(MaxFeatures::Log2.resolve(61), 5);
        assert_eq!(MaxFeatures::All.resolve(61), 61);
        assert_eq!(MaxFeatures::Sqrt.resolve(1), 1);
    }

    #[test]
    fn weighted_gini_of_pure_and_mixed_nodes() {
        assert_eq!(weighted_gini(&[4, 0], 4), 0.0);
        assert_eq!(weighted_gini(&[2, 2], 4), 2.0);
    }

    #[test]
    fn learns_a_threshold() {
        let dataset = threshold_dataset();
        let options = TrainOptions {
            trees: 15,
            ..TrainOptions::default()
        };
        let model = train_random_forest(&dataset, &options).unwrap();
        model.validate().unwrap();
        assert_eq!(model.trees.len(), 15);
        assert_eq!(model.predict_class_index(&[0.0, 1.0]), 0);
        assert_eq!(model.predict_class_index(&[9.0, 1.0]), 1);
        let correct = dataset
            .x
            .iter()
            .zip(&dataset.y)
            .filter(|(row, y)| model.predict_class_index(row) == **y)
            .count();
        assert_eq!(correct, dataset.x.len());
    }

    #[test]
    fn importances_favor_the_informative_feature() {
        let model = train_random_forest(&threshold_dataset(), &TrainOptions::default()).unwrap();
        let sum: f32 = model.feature_importances.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(model.feature_importances[0] > model.feature_importances[1]);
    }

    #[test]
    fn same_seed_same_model() {
        let dataset = threshold_dataset();
        let options = TrainOptions {
            trees: 10,
            ..TrainOptions::default()
        };
        let a = train_random_forest(&dataset, &options).unwrap();
        let b = train_random_forest(&dataset, &options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn max_depth_limits_growth() {
        let options = TrainOptions {
            trees: 5,
            max_depth: Some(1),
            ..TrainOptions::default()
        };
        let model = train_random_forest(&threshold_dataset(), &options).unwrap();
        assert!(model.trees.iter().all(|tree| tree.depth() <= 1));
    }

    #[test]
    fn single_class_dataset_yields_leaf_only_trees() {
        let dataset = TrainDataset {
            feature_len: 1,
            classes: classes(),
            x: vec![vec![1.0], vec![2.0], vec![3.0]],
            y: vec![1, 1, 1],
        };
        let model = train_random_forest(&dataset, &TrainOptions::default()).unwrap();
        assert!(model.trees.iter().all(|tree| tree.nodes.len() == 1));
        assert_eq!(model.predict_proba(&[0.0]), vec![0.0, 1.0]);
        assert_eq!(model.feature_importances, vec![0.0]);
    }

    #[test]
    fn rejects_malformed_input() {
        let mut dataset = threshold_dataset();
        dataset.y.pop();
        assert!(train_random_forest(&dataset, &TrainOptions::default()).is_err());

        let mut dataset = threshold_dataset();
        dataset.y[0] = 2;
        assert!(
            train_random_forest(&dataset, &TrainOptions::default())
                .unwrap_err()
                .contains("outside the class list")
        );
    }
}
