//! Nearest-next sequencing over a pre-fetched road matrix.

use kerbside_core::{
    CostMode, EnergyWeights, ProviderError, ProviderKind, RoadLeg, RoadMatrix, RouteMetrics,
    energy_cost, uphill_gain,
};

/// One selected leg, addressed by point index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedLeg {
    /// Index of the origin point.
    pub from: usize,
    /// Index of the destination point.
    pub to: usize,
    /// Road distance and duration of the leg.
    pub road: RoadLeg,
    /// Metres climbed; zero in distance-only mode.
    pub elevation_gain: f64,
    /// Cost that won the selection.
    pub cost: f64,
}

/// Visiting order and metrics produced by [`plan_greedy_route`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GreedyPlan {
    /// Point indices in visiting order, starting with `0`.
    pub order: Vec<usize>,
    /// Selected legs; one fewer than `order`.
    pub legs: Vec<PlannedLeg>,
    /// Totals over `legs`.
    pub metrics: RouteMetrics,
}

#[derive(Debug, Clone, Copy)]
enum CostModel<'a> {
    Distance,
    Energy {
        elevations: &'a [f64],
        weights: &'a EnergyWeights,
    },
}

impl CostModel<'_> {
    fn price(&self, from: usize, to: usize, road: RoadLeg) -> Option<PlannedLeg> {
        match *self {
            Self::Distance => Some(PlannedLeg {
                from,
                to,
                road,
                elevation_gain: 0.0,
                cost: road.distance,
            }),
            Self::Energy {
                elevations,
                weights,
            } => {
                let start = elevations.get(from).copied()?;
                let end = elevations.get(to).copied()?;
                Some(PlannedLeg {
                    from,
                    to,
                    road,
                    elevation_gain: uphill_gain(start, end),
                    cost: energy_cost(road.distance, road.duration, start, end, weights),
                })
            }
        }
    }
}

/// Sequence every point of `matrix` greedily, starting from index `0`.
///
/// At each step the unvisited point with the strictly lowest leg cost from
/// the current point is chosen; on an exact tie the lower index wins. In
/// [`CostMode::Standard`] the cost is the road distance and `elevations` is
/// ignored. In [`CostMode::Green`] the cost is [`energy_cost`] and one
/// elevation per point is required.
///
/// # Errors
///
/// Returns [`ProviderError::Unsupported`] when green mode is requested
/// without elevations, and [`ProviderError::DimensionMismatch`] when the
/// elevation count differs from the matrix size. A negative or non-finite
/// leg, or a non-finite elevation, is [`ProviderError::MissingCell`].
///
/// # Examples
/// ```
/// use kerbside_core::{CostMode, EnergyWeights, RoadLeg, RoadMatrix};
/// use kerbside_solver_greedy::plan_greedy_route;
///
/// let z = RoadLeg::default();
/// let matrix = RoadMatrix::from_rows(vec![
///     vec![z, RoadLeg::new(500.0, 60.0), RoadLeg::new(2000.0, 240.0)],
///     vec![RoadLeg::new(500.0, 60.0), z, RoadLeg::new(100.0, 12.0)],
///     vec![RoadLeg::new(2000.0, 240.0), RoadLeg::new(100.0, 12.0), z],
/// ])?;
///
/// let plan = plan_greedy_route(&matrix, None, CostMode::Standard, &EnergyWeights::default())?;
/// assert_eq!(plan.order, vec![0, 1, 2]);
/// assert_eq!(plan.metrics.distance, 600.0);
/// # Ok::<(), kerbside_core::ProviderError>(())
/// ```
pub fn plan_greedy_route(
    matrix: &RoadMatrix,
    elevations: Option<&[f64]>,
    mode: CostMode,
    weights: &EnergyWeights,
) -> Result<GreedyPlan, ProviderError> {
    let size = matrix.size();
    let model = match (mode, elevations) {
        (CostMode::Standard, _) => CostModel::Distance,
        (CostMode::Green, None) => {
            return Err(ProviderError::Unsupported {
                provider: ProviderKind::Elevation,
            });
        }
        (CostMode::Green, Some(values)) if values.len() != size => {
            return Err(ProviderError::DimensionMismatch {
                expected: size,
                actual: values.len(),
            });
        }
        (CostMode::Green, Some(values)) => {
            ensure_finite_elevations(values)?;
            CostModel::Energy {
                elevations: values,
                weights,
            }
        }
    };
    matrix.ensure_valid_legs()?;

    if size == 0 {
        return Ok(GreedyPlan::default());
    }

    let mut unvisited: Vec<usize> = (1..size).collect();
    let mut plan = GreedyPlan {
        order: Vec::with_capacity(size),
        legs: Vec::with_capacity(size.saturating_sub(1)),
        metrics: RouteMetrics::default(),
    };
    plan.order.push(0);
    let mut current = 0_usize;

    while let Some((position, leg)) = cheapest_next(matrix, &model, current, &unvisited)? {
        unvisited.remove(position);
        log::debug!(
            "leg {} -> {}: {:.1} m, {:.1} s, cost {:.1}",
            leg.from,
            leg.to,
            leg.road.distance,
            leg.road.duration,
            leg.cost
        );
        accumulate(&mut plan.metrics, &leg);
        plan.order.push(leg.to);
        plan.legs.push(leg);
        current = leg.to;
    }

    if matches!(model, CostModel::Distance) {
        plan.metrics.energy_score = plan.metrics.distance;
    }
    Ok(plan)
}

/// Reject elevations that would make a leg cost undefined.
///
/// Errors carry the point index as `row` and `0` as `col`.
pub(crate) fn ensure_finite_elevations(elevations: &[f64]) -> Result<(), ProviderError> {
    elevations
        .iter()
        .position(|value| !value.is_finite())
        .map_or(Ok(()), |row| Err(ProviderError::MissingCell { row, col: 0 }))
}

/// Position in `unvisited` and priced leg of the cheapest next stop, or
/// `None` once every stop is visited.
fn cheapest_next(
    matrix: &RoadMatrix,
    model: &CostModel<'_>,
    current: usize,
    unvisited: &[usize],
) -> Result<Option<(usize, PlannedLeg)>, ProviderError> {
    let mut best: Option<(usize, PlannedLeg)> = None;
    for (position, &candidate) in unvisited.iter().enumerate() {
        let leg = matrix
            .leg(current, candidate)
            .and_then(|road| model.price(current, candidate, road))
            .ok_or(ProviderError::MissingCell {
                row: current,
                col: candidate,
            })?;
        if best.is_none_or(|(_, chosen)| leg.cost < chosen.cost) {
            best = Some((position, leg));
        }
    }
    Ok(best)
}

#[expect(clippy::float_arithmetic, reason = "running totals")]
fn accumulate(metrics: &mut RouteMetrics, leg: &PlannedLeg) {
    metrics.distance += leg.road.distance;
    metrics.duration += leg.road.duration;
    metrics.elevation_gain += leg.elevation_gain;
    metrics.energy_score += leg.cost;
}
