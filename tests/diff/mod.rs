mod show_grapheme_diff_for_accented_word;
mod show_line_diff_for_rewritten_lines;
mod show_unchanged_text_for_identical_files;
mod show_word_diff_listing_with_positions;
