mod editing;
mod navigation;
mod owner_gate;
mod stale_results;
