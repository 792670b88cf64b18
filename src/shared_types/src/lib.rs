// Types for the shell are generated by build.rs
