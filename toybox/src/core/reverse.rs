//! String reversal by two-pointer swap.

/// Reverse `chars` in place, swapping from both ends until the pointers meet.
pub fn reverse_chars(chars: &mut [char]) {
    if chars.is_empty() {
        return;
    }
    let (mut i, mut j) = (0, chars.len() - 1);
    while i < j {
        chars.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Reverse `input` by Unicode scalar value.
pub fn reverse_str(input: &str) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    reverse_chars(&mut chars);
    chars.into_iter().collect()
}
