use letterboxed::{
    find_combinations, is_playable, load_dictionary, Dictionary, LetterboxedSolver, Puzzle,
    Solution, Word,
};

fn puzzle() -> Puzzle {
    Puzzle::parse("RKM,UIC,PHG,NAY").unwrap()
}

fn solution(first: &str, second: &str) -> Solution {
    Solution {
        first: first.to_string(),
        second: second.to_string(),
    }
}

#[test]
fn test_playable_words() {
    let puzzle = puzzle();
    for text in ["rain", "chimp", "chipmunk", "pumpkin", "hungry", "crying"] {
        assert!(is_playable(&Word::encode(text), &puzzle), "{} should be playable", text);
    }
}

#[test]
fn test_rejects_letters_outside_puzzle() {
    let puzzle = puzzle();
    assert!(!is_playable(&Word::encode("pizza"), &puzzle));
    assert!(!is_playable(&Word::encode("zig"), &puzzle));
}

#[test]
fn test_rejects_same_side_neighbours() {
    let puzzle = puzzle();
    // r and k share a side
    assert!(!is_playable(&Word::encode("rkay"), &puzzle));
    // a and n share a side
    assert!(!is_playable(&Word::encode("pan"), &puzzle));
    // doubled letters are always on the same side
    assert!(!is_playable(&Word::encode("puppy"), &puzzle));
}

#[test]
fn test_rejects_short_words() {
    let puzzle = puzzle();
    assert!(!is_playable(&Word::encode("hi"), &puzzle));
    assert!(!is_playable(&Word::encode("a"), &puzzle));
    assert!(!is_playable(&Word::encode(""), &puzzle));
}

#[test]
fn test_repeated_letters_allowed_when_sides_alternate() {
    let puzzle = puzzle();
    // c-r-a-c-k revisits c but never stays on one side
    assert!(is_playable(&Word::encode("crack"), &puzzle));
}

#[test]
fn test_solver_filters_dictionary() {
    let dictionary = Dictionary::from_text("rain\nmick\npizza\nrkay\nhi\nchipmunk\n");
    let solver = LetterboxedSolver::new(puzzle(), &dictionary);
    let playable: Vec<&str> = solver.playable().iter().map(Word::letters).collect();
    // i and c share a side, so "mick" is out
    assert_eq!(playable, ["rain", "chipmunk"]);
    assert_eq!(solver.playable_count(), 2);
}

#[test]
fn test_no_solutions_is_not_an_error() {
    let dictionary = Dictionary::from_text("rain\nmick\n");
    let solver = LetterboxedSolver::new(puzzle(), &dictionary);
    assert!(solver.solve().is_empty());

    let dictionary = Dictionary::from_text("rain\nchimp\nhung\n");
    let solver = LetterboxedSolver::new(puzzle(), &dictionary);
    assert_eq!(solver.playable_count(), 3);
    assert!(solver.solve().is_empty());
}

#[test]
fn test_empty_dictionary() {
    let solver = LetterboxedSolver::new(puzzle(), &Dictionary::default());
    assert!(solver.playable().is_empty());
    assert!(solver.solve().is_empty());
}

#[test]
fn test_find_combinations_order() {
    let full = Word::encode("abcdefghijkl").mask();
    let words: Vec<Word> = ["abcdefx", "xghijkl", "xghijklx", "abcdefgx"]
        .iter()
        .map(|w| Word::encode(w))
        .collect();
    let found = find_combinations(&words, full);
    assert_eq!(
        found,
        [
            solution("abcdefx", "xghijkl"),
            solution("abcdefx", "xghijklx"),
            solution("abcdefgx", "xghijkl"),
            solution("abcdefgx", "xghijklx"),
        ]
    );
}

#[test]
fn test_word_pairs_with_itself() {
    let full = Word::encode("abcdefghijkl").mask();
    let words = vec![Word::encode("abcdefghijkla")];
    assert_eq!(
        find_combinations(&words, full),
        [solution("abcdefghijkla", "abcdefghijkla")]
    );
}

#[test]
fn test_chain_rule_enforced() {
    let full = Word::encode("abcdefghijkl").mask();
    let words = vec![Word::encode("abcdefx"), Word::encode("yghijkl")];
    assert!(find_combinations(&words, full).is_empty());
}

#[test]
fn test_full_dictionary_solutions() {
    let dictionary = load_dictionary();
    let solver = LetterboxedSolver::new(Puzzle::parse("BDH,EIL,NOR,PTU").unwrap(), &dictionary);
    assert_eq!(
        solver.solve(),
        [
            solution("point", "thunderbolt"),
            solution("print", "thunderbolt"),
            solution("thunderbolt", "trip"),
        ]
    );
}

#[test]
fn test_solutions_chain_and_cover() {
    let dictionary = load_dictionary();
    for spec in ["BDH,EIL,NOR,PTU", "ACE,IKM,LPR,NOT", "RKM,UIC,PHG,NAY"] {
        let puzzle = Puzzle::parse(spec).unwrap();
        let full = puzzle.full_mask();
        let solver = LetterboxedSolver::new(puzzle, &dictionary);

        for found in solver.solve() {
            let first = Word::encode(&found.first);
            let second = Word::encode(&found.second);
            assert_eq!(first.last_letter(), second.first_letter(), "{}", found);
            assert_eq!((first.mask() | second.mask()) & full, full, "{}", found);
            assert!(is_playable(&first, solver.puzzle()));
            assert!(is_playable(&second, solver.puzzle()));
        }
    }
}

#[test]
fn test_solution_display() {
    assert_eq!(solution("pocket", "trampoline").to_string(), "pocket trampoline");
}
