pub mod a001_opportunity_line_item;
