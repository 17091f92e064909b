pub mod animation_view;
pub mod behavior_view;

pub use animation_view::AnimationView;
pub use behavior_view::BehaviorView;
