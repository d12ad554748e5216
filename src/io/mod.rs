/*!
# IO utilities

Reading of the Tatoeba tab-separated exports, and writing of the merged pairs.
!*/
pub mod reader;
pub mod writer;
