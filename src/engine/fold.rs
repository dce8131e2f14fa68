// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::future::Future;

/// Thread an accumulator through an ordered list of stages.
///
/// Each `step` runs to completion before the next one starts, and the first
/// error ends the fold. This is the only place stage order is decided.
pub async fn fold_stages<A, I, F, Fut, E>(seed: A, stages: I, mut step: F) -> Result<A, E>
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> Fut,
    Fut: Future<Output = Result<A, E>>,
{
    let mut acc = seed;
    for stage in stages {
        acc = step(acc, stage).await?;
    }
    Ok(acc)
}
