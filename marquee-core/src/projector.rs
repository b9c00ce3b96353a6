//! Derived view projection: the star-rating narrowing applied between the
//! stored result set and what the grid renders.

use marquee_model::MovieSummary;

/// Project the stored results through the star filter.
///
/// With no filter the input comes back unchanged: same elements, same
/// order. With a filter, only entries whose floored average rating equals
/// the requested bucket survive, original order preserved. Pure and
/// recomputed on every call; nothing is cached.
pub fn project(results: &[MovieSummary], star_filter: Option<u8>) -> Vec<MovieSummary> {
    match star_filter {
        None => results.to_vec(),
        Some(star) => results
            .iter()
            .filter(|movie| movie.star_bucket() == star)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::project;
    use marquee_model::MovieSummary;

    fn movie(id: u64, vote_average: f32) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {id}"),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            vote_average,
            release_date: None,
        }
    }

    #[test]
    fn no_filter_returns_the_input_unchanged() {
        let results = vec![movie(1, 6.2), movie(2, 8.9), movie(3, 7.0)];
        assert_eq!(project(&results, None), results);
    }

    #[test]
    fn filter_keeps_only_the_matching_bucket_in_order() {
        let results = vec![
            movie(1, 6.2),
            movie(2, 7.9),
            movie(3, 6.0),
            movie(4, 8.1),
            movie(5, 6.99),
        ];

        let sixes = project(&results, Some(6));
        assert_eq!(
            sixes.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![1, 3, 5]
        );

        let sevens = project(&results, Some(7));
        assert_eq!(sevens.iter().map(|m| m.id).collect::<Vec<_>>(), vec![2]);

        let eights = project(&results, Some(8));
        assert_eq!(eights.iter().map(|m| m.id).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn empty_input_projects_to_empty_for_every_filter() {
        for star in [None, Some(6), Some(7), Some(8)] {
            assert!(project(&[], star).is_empty());
        }
    }

    #[test]
    fn unmatched_bucket_projects_to_empty() {
        let results = vec![movie(1, 6.5), movie(2, 7.5)];
        assert!(project(&results, Some(8)).is_empty());
    }
}
