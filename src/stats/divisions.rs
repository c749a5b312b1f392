use crate::bdl::types::Team;

/// Teams of one division, in the order they were listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionGroup<'a> {
    pub division: &'a str,
    pub teams: Vec<&'a Team>,
}

/// Partition teams by division. Divisions come out in first-seen order and
/// teams keep their input order within each division.
pub fn group_by_division(teams: &[Team]) -> Vec<DivisionGroup<'_>> {
    let mut groups: Vec<DivisionGroup<'_>> = Vec::new();

    for team in teams {
        match groups.iter_mut().find(|g| g.division == team.division) {
            Some(group) => group.teams.push(team),
            None => groups.push(DivisionGroup {
                division: &team.division,
                teams: vec![team],
            }),
        }
    }

    groups
}
