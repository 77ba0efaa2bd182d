/*!
# `LIST`

## Purpose
Show the BASIC program currently in memory.

## Remarks
Lines are shown in line number order, regardless of the order
they were typed in.

## Example
```text
20 PRINT 2
10 PRINT 1
LIST
10 PRINT 1
20 PRINT 2
```

*/
