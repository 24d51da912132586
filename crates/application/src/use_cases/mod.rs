pub mod stats;

pub use stats::PublishResolverStatsUseCase;
